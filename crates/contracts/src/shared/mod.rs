pub mod log_line;

pub use log_line::LogLine;
