use crate::client::Client;
use crate::error::BackendError;
use common::status::StatusResponse;
use common::transfer::{ApiMessage, TransferRequest, TransferResponse};

impl Client {
    /// `POST /api/usdt/transfer` - one attempt, no retry; resubmission policy
    /// belongs to the caller. A non-2xx answer becomes `Rejected` with the
    /// backend-supplied reason. The 2xx body is kept even when it does not
    /// match any known shape, so the authorization-id extraction can still
    /// probe it.
    pub async fn submit_transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<TransferResponse, BackendError> {
        let response = self
            .execute(self.post("/api/usdt/transfer").json(request))
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message: ApiMessage = serde_json::from_str(&body).unwrap_or_default();
            return Err(BackendError::Rejected {
                status: status.as_u16(),
                message: message
                    .message()
                    .unwrap_or_else(|| format!("Transfer failed ({})", status.as_u16())),
            });
        }

        Ok(serde_json::from_str(&body)
            .unwrap_or(TransferResponse::Unknown(serde_json::Value::Null)))
    }

    /// `GET /api/usdt/status?authorizationId=` - the HTTP status is ignored
    /// and an unreadable body degrades to an empty answer: a broken status
    /// endpoint reads as "still pending" to the poller.
    pub async fn transfer_status(
        &self,
        authorization_id: &str,
    ) -> Result<StatusResponse, BackendError> {
        let response = self
            .execute(
                self.get("/api/usdt/status")
                    .query(&[("authorizationId", authorization_id)]),
            )
            .await?;
        let body = response.text().await?;

        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}
