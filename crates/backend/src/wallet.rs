use crate::client::Client;
use crate::error::BackendError;
use common::user::WalletResponse;

impl Client {
    /// `GET /api/wallet?userId=` - the custodial wallet address backing a
    /// user's balance. An answer without an address is a failure even on 2xx.
    pub async fn wallet_address(&self, user_id: &str) -> Result<String, BackendError> {
        let response = self
            .execute(self.get("/api/wallet").query(&[("userId", user_id)]))
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let wallet: WalletResponse = serde_json::from_str(&body).unwrap_or_default();
        match wallet.address {
            Some(address) if status.is_success() => Ok(address),
            _ => Err(BackendError::Api {
                status: status.as_u16(),
                message: wallet.error.unwrap_or_else(|| "Wallet not found".to_string()),
            }),
        }
    }
}
