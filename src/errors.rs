use astra::Response;
// errors.rs
use crate::domain::BoardError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or the campaign board.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// The request was built against a board that has since changed.
    Conflict(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

// A stale or hand-typed index in a URL is just a missing campaign to the client.
impl From<BoardError> for ServerError {
    fn from(err: BoardError) -> Self {
        tracing::warn!(error = %err, "board lookup failed");
        ServerError::NotFound
    }
}
