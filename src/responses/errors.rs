use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();

    if status >= 500 {
        tracing::error!(%err, status, "request failed");
    } else {
        tracing::debug!(%err, status, "request rejected");
    }

    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
