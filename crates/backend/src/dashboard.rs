use crate::client::Client;
use crate::error::BackendError;
use common::dashboard::DashboardData;

impl Client {
    /// `GET /api/dashboard` - balance, the five most recent transactions and
    /// the month-to-date summary.
    pub async fn dashboard(&self) -> Result<DashboardData, BackendError> {
        self.expect_json(self.get("/api/dashboard")).await
    }
}
