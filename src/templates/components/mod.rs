pub mod error;
pub mod tabs;

pub use error::error_page;
pub use tabs::{tab_bar, tab_panel};
