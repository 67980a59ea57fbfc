pub mod auth;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod transactions;
pub mod usdt;
pub mod users;
pub mod wallet;

pub use client::Client;
pub use error::BackendError;
pub use transactions::TransactionFilter;
