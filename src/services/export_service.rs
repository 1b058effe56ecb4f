use crate::dto::analytics_dto::JobAnalytics;
use crate::error::Result;
use crate::models::job::Job;
use rust_xlsxwriter::*;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct ExportService;

impl ExportService {
    /// Workbook with one row per application plus a metrics summary sheet.
    pub fn generate_jobs_xlsx(jobs: &[Job], metrics: &JobAnalytics) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        let primary_color = Color::RGB(0x1E293B);
        let header_bg = Color::RGB(0x0F172A);
        let header_text = Color::White;
        let alt_row_1 = Color::RGB(0xF8FAFC);
        let alt_row_2 = Color::White;
        let border_color = Color::RGB(0xE2E8F0);
        let unknown_status = Color::RGB(0x95A5A6);

        let columns = [
            ("#", 6.0),
            ("Company", 28.0),
            ("Position", 30.0),
            ("Location", 22.0),
            ("Status", 16.0),
            ("Applied", 14.0),
            ("Last activity", 16.0),
            ("Resume", 18.0),
            ("Response", 12.0),
            ("Follow-up", 14.0),
            ("Salary", 18.0),
            ("Contact", 28.0),
            ("URL", 40.0),
        ];
        let last_col = (columns.len() - 1) as u16;

        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name("Applications")?;

            for (i, (_, width)) in columns.iter().enumerate() {
                worksheet.set_column_width(i as u16, *width)?;
            }

            let title_format = Format::new()
                .set_font_size(16)
                .set_bold()
                .set_font_color(header_text)
                .set_background_color(primary_color)
                .set_align(FormatAlign::CenterAcross)
                .set_align(FormatAlign::VerticalCenter);
            worksheet.set_row_height(0, 36)?;
            worksheet.merge_range(0, 0, 0, last_col, "Job applications", &title_format)?;

            let subtitle_format = Format::new()
                .set_font_size(10)
                .set_italic()
                .set_font_color(Color::RGB(0x94A3B8))
                .set_background_color(primary_color)
                .set_align(FormatAlign::CenterAcross)
                .set_align(FormatAlign::VerticalCenter);
            worksheet.set_row_height(1, 22)?;
            let subtitle = format!(
                "Exported {}  •  {} applications",
                chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"),
                jobs.len()
            );
            worksheet.merge_range(1, 0, 1, last_col, &subtitle, &subtitle_format)?;

            let header_format = Format::new()
                .set_bold()
                .set_font_size(10)
                .set_font_color(header_text)
                .set_background_color(header_bg)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap()
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);

            let header_row = 2;
            worksheet.set_row_height(header_row, 28)?;
            for (i, (name, _)) in columns.iter().enumerate() {
                worksheet.write_string_with_format(header_row, i as u16, *name, &header_format)?;
            }

            let data_start_row = 3;
            for (idx, job) in jobs.iter().enumerate() {
                let row = data_start_row + idx as u32;
                let bg = if idx % 2 == 0 { alt_row_1 } else { alt_row_2 };

                let base_fmt = Format::new()
                    .set_font_size(10)
                    .set_background_color(bg)
                    .set_align(FormatAlign::VerticalCenter)
                    .set_border(FormatBorder::Thin)
                    .set_border_color(border_color);
                let center_fmt = base_fmt.clone().set_align(FormatAlign::Center);

                worksheet.set_row_height(row, 20)?;
                worksheet.write_number_with_format(row, 0, (idx + 1) as f64, &center_fmt)?;
                worksheet.write_string_with_format(row, 1, &job.company, &base_fmt.clone().set_bold())?;
                worksheet.write_string_with_format(row, 2, &job.position, &base_fmt)?;
                worksheet.write_string_with_format(row, 3, &job.location, &base_fmt)?;

                let status_color = job
                    .status_kind()
                    .map(|s| Color::RGB(s.rgb()))
                    .unwrap_or(unknown_status);
                let status_fmt = Format::new()
                    .set_font_size(10)
                    .set_bold()
                    .set_font_color(Color::White)
                    .set_background_color(status_color)
                    .set_align(FormatAlign::Center)
                    .set_align(FormatAlign::VerticalCenter)
                    .set_border(FormatBorder::Thin)
                    .set_border_color(border_color);
                worksheet.write_string_with_format(row, 4, &job.status, &status_fmt)?;

                let applied = job.applied_date.format("%Y-%m-%d").to_string();
                worksheet.write_string_with_format(row, 5, &applied, &center_fmt)?;

                let last_activity = job
                    .last_activity
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "—".to_string());
                worksheet.write_string_with_format(row, 6, &last_activity, &center_fmt)?;

                worksheet.write_string_with_format(row, 7, &job.resume_version, &center_fmt)?;
                let response = if job.response_received { "Yes" } else { "No" };
                worksheet.write_string_with_format(row, 8, response, &center_fmt)?;

                let follow_up = job
                    .follow_up_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "—".to_string());
                worksheet.write_string_with_format(row, 9, &follow_up, &center_fmt)?;

                worksheet.write_string_with_format(row, 10, or_dash(&job.salary), &base_fmt)?;
                worksheet.write_string_with_format(row, 11, &contact_line(job), &base_fmt)?;
                worksheet.write_string_with_format(row, 12, or_dash(&job.job_url), &base_fmt)?;
            }

            worksheet.set_freeze_panes(3, 0)?;
            let last_data_row = (data_start_row + jobs.len() as u32).saturating_sub(1).max(header_row);
            worksheet.autofilter(header_row, 0, last_data_row, last_col)?;
        }

        {
            let summary = workbook.add_worksheet();
            summary.set_name("Summary")?;
            summary.set_column_width(0, 28.0)?;
            summary.set_column_width(1, 16.0)?;

            let label_fmt = Format::new()
                .set_bold()
                .set_font_size(10)
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);
            let value_fmt = Format::new()
                .set_font_size(10)
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);

            let mut rows: Vec<(String, String)> = vec![
                ("Applications".to_string(), metrics.total_jobs.to_string()),
                ("Response rate".to_string(), format!("{}%", metrics.response_rate)),
                ("Success rate".to_string(), format!("{}%", metrics.success_rate)),
                ("Rejection rate".to_string(), format!("{}%", metrics.rejection_rate)),
                (
                    "Avg. time to response".to_string(),
                    format!("{} days", metrics.avg_time_to_response),
                ),
            ];
            for (status, count) in metrics.status_distribution.iter() {
                rows.push((status.as_str().to_string(), count.to_string()));
            }
            for entry in &metrics.resume_performance {
                rows.push((
                    format!("Resume: {}", entry.version),
                    format!("{}% / {}%", entry.response_rate, entry.offer_rate),
                ));
            }

            for (idx, (label, value)) in rows.iter().enumerate() {
                let row = idx as u32;
                summary.write_string_with_format(row, 0, label, &label_fmt)?;
                summary.write_string_with_format(row, 1, value, &value_fmt)?;
            }
        }

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}

fn contact_line(job: &Job) -> String {
    let parts: Vec<&str> = [&job.contact_name, &job.contact_email, &job.contact_phone]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analytics_service::AnalyticsService;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn job(company: &str, status: &str) -> Job {
        let applied = Utc.with_ymd_and_hms(2025, 2, 3, 9, 0, 0).unwrap();
        Job {
            id: Uuid::new_v4(),
            company: company.to_string(),
            position: "Engineer".to_string(),
            location: "Remote".to_string(),
            job_url: String::new(),
            description: String::new(),
            salary: String::new(),
            status: status.to_string(),
            applied_date: applied,
            last_activity: Some(applied),
            resume_version: "default".to_string(),
            notes: String::new(),
            contact_name: "Dana".to_string(),
            contact_email: String::new(),
            contact_phone: "555-0100".to_string(),
            follow_up_date: None,
            response_received: false,
            created_at: applied,
            updated_at: applied,
        }
    }

    #[test]
    fn export_produces_a_zip_container() {
        let jobs = vec![job("Acme", "Applied"), job("Globex", "Ghosted")];
        let metrics = AnalyticsService::compute(&jobs);
        let bytes = ExportService::generate_jobs_xlsx(&jobs, &metrics).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn export_handles_empty_collections() {
        let metrics = AnalyticsService::compute(&[]);
        let bytes = ExportService::generate_jobs_xlsx(&[], &metrics).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn contact_line_skips_blank_parts() {
        assert_eq!(contact_line(&job("Acme", "Applied")), "Dana, 555-0100");
        assert_eq!(or_dash("  "), "—");
    }
}
