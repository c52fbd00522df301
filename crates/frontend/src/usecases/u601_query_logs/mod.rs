pub mod api;
pub mod console;
pub mod form;
pub mod render;
pub mod view;

pub use console::{ConsoleStatus, QueryConsole};
pub use view::QueryConsolePage;
