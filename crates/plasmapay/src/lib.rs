pub mod authorization;
pub mod dashboard;
pub mod error;
pub mod poll;
pub mod transfer;

pub use authorization::AuthorizationId;
pub use error::TransferError;
pub use poll::{CancelHandle, CancelToken, PollParams, StatusSource, cancel_pair, wait_for_final};
pub use transfer::{sanitize_amount, send_and_wait, submit, validate};
