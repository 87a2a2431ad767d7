use crate::errors::ServerError;
use crate::locale::Locale;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError, locale: Locale) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found", locale),

        ServerError::BadRequest(msg) => render_error(400, &msg, locale),

        ServerError::Conflict(msg) => render_error(409, &msg, locale),

        ServerError::InternalError => render_error(500, "Internal Server Error", locale),
    }
}

fn render_error(status: u16, message: &str, locale: Locale) -> Response {
    let body = error_page(status, message, locale).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
