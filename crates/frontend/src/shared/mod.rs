pub mod api_utils;
pub mod chat_log;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod list_utils;
