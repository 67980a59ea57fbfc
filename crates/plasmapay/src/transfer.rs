use crate::authorization::{self, AuthorizationId};
use crate::error::TransferError;
use crate::poll::{self, PollParams};
use backend::{BackendError, Client};
use common::status::TransferStatus;
use common::transfer::{TransferRequest, TransferResponse};

/// Keep only the characters that can appear in a decimal amount. Pasted
/// values routinely arrive with currency symbols or stray text attached.
pub fn sanitize_amount(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Validate and normalize a draft transfer. Runs before anything touches the
/// network: a rejected draft never produces a request.
pub fn validate(
    user_id: &str,
    recipient: &str,
    amount: &str,
) -> Result<TransferRequest, TransferError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(TransferError::MissingUserId);
    }

    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(TransferError::InvalidRecipient);
    }

    let amount = sanitize_amount(amount.trim());
    let value: f64 = amount.parse().unwrap_or(0.0);
    if value <= 0.0 {
        return Err(TransferError::InvalidAmount);
    }

    Ok(TransferRequest {
        user_id: user_id.to_string(),
        recipient: recipient.to_string(),
        amount,
    })
}

/// Submit a validated transfer. One network attempt only; callers own any
/// resubmission policy.
pub async fn submit(
    client: &Client,
    request: &TransferRequest,
) -> Result<AuthorizationId, TransferError> {
    log::debug!(
        "Submitting transfer of {} to {}",
        request.amount,
        request.recipient
    );

    let response = client.submit_transfer(request).await.map_err(|err| match err {
        BackendError::Rejected { message, .. } => TransferError::Rejected { message },
        other => TransferError::Backend(other),
    })?;

    let authorization_id = authorization_from_response(&response)?;
    log::debug!("Transfer queued with authorization id {}", authorization_id);
    Ok(authorization_id)
}

pub fn authorization_from_response(
    response: &TransferResponse,
) -> Result<AuthorizationId, TransferError> {
    authorization::extract(response).ok_or(TransferError::MissingAuthorizationId)
}

/// The whole send flow: resolve the acting user from the session, validate,
/// submit, then poll to a terminal status.
pub async fn send_and_wait(
    client: &Client,
    recipient: &str,
    amount: &str,
) -> Result<TransferStatus, TransferError> {
    let user_id = client.user_id().ok_or(TransferError::MissingUserId)?;
    let request = validate(&user_id, recipient, amount)?;

    let authorization_id = submit(client, &request).await?;
    poll::wait_for_final(client, PollParams::new(authorization_id)).await
}
