pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

// Normal HTML response
pub use html::{css_response, html_response, redirect_response};
pub use json::json_response;
