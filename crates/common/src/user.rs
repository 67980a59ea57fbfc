use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(rename = "walletAddress", default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

/// Returned by both the register and login endpoints.
#[derive(Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExistsResponse {
    #[serde(default)]
    pub exists: bool,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct WalletResponse {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
