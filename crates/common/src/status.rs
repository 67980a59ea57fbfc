use serde::Deserialize;
use std::fmt;

/// Raw body of the status endpoint. Callers fall back to
/// `StatusResponse::default()` when the body does not parse, so an unreadable
/// answer is indistinguishable from an empty one.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "txHash", default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Client-side view of a transfer's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStatus {
    Pending,
    Confirmed { tx_hash: Option<String> },
    Failed { error: Option<String> },
    Timeout { error: Option<String> },
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed { .. } => "confirmed",
            Self::Failed { .. } => "failed",
            Self::Timeout { .. } => "timeout",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
