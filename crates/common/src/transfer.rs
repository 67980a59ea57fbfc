use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransferRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub recipient: String,
    pub amount: String,
}

/// Envelope returned by the transfer endpoint. The backend answers with a
/// different shape depending on whether the relayer was involved, so the
/// variants are attempted in order and anything unrecognized is kept as-is.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum TransferResponse {
    Direct {
        #[serde(rename = "authorizationId")]
        authorization_id: String,
        #[serde(default)]
        relayer_response: Option<RelayerEnvelope>,
    },
    Relayed {
        relayer_response: RelayerEnvelope,
    },
    Unknown(serde_json::Value),
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum RelayerEnvelope {
    Fields {
        #[serde(rename = "authorizationId", default)]
        authorization_id: Option<String>,
        #[serde(default)]
        raw: Option<String>,
    },
    Other(serde_json::Value),
}

/// Error body sent on non-2xx responses: `{error}` or `{message}`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessage {
    /// The backend-supplied message, `error` taking precedence.
    pub fn message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
