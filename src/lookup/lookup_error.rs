use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("No orders found for this phone number")]
    NotFound,
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Order API returned HTTP {status}")]
    Upstream { status: u16 },
    #[error("Could not decode order API response: {0}")]
    Decode(String),
}

impl LookupError {
    /// Everything except bad input and not-found is a "try again later".
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LookupError::Transport(_) | LookupError::Upstream { .. } | LookupError::Decode(_)
        )
    }
}
