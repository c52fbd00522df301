pub mod u601_query_logs;
pub mod u602_export_lines;
