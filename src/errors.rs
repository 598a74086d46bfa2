use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or downstream layers (order API, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Order API Error: {0}")]
    Upstream(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) => 502,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}
