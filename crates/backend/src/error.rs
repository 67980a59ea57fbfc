use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed [{status}]: {message}")]
    Api { status: u16, message: String },

    /// Non-2xx answer from the transfer endpoint, carrying the
    /// backend-supplied reason.
    #[error("Transfer rejected [{status}]: {message}")]
    Rejected { status: u16, message: String },

    /// The backend answered 401; the session's auth state has been cleared.
    #[error("Session expired, log in again")]
    AuthExpired,

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
