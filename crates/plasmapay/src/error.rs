use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    /// The amount did not survive sanitize-and-validate; nothing was sent.
    #[error("Enter a valid amount (e.g. 1.00)")]
    InvalidAmount,

    /// Empty recipient; nothing was sent.
    #[error("Enter recipient username or email")]
    InvalidRecipient,

    /// No acting user id could be resolved from the session.
    #[error("Missing userId for transfer")]
    MissingUserId,

    /// The backend turned the transfer down, with its own reason.
    #[error("Transfer rejected: {message}")]
    Rejected { message: String },

    /// The submit call succeeded but no authorization id could be located in
    /// any of the response shapes.
    #[error("Backend did not return an authorization id")]
    MissingAuthorizationId,

    #[error(transparent)]
    Backend(#[from] backend::BackendError),

    /// The poll was abandoned through its cancellation handle.
    #[error("Polling cancelled")]
    Cancelled,
}
