pub mod interview;
pub mod job;
