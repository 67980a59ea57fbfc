use crate::client::Client;
use crate::error::BackendError;
use common::user::ExistsResponse;

impl Client {
    /// `GET /api/users/exists?query=` - whether a username or email resolves
    /// to a registered user. Used to vet a recipient before submitting.
    pub async fn user_exists(&self, query: &str) -> Result<bool, BackendError> {
        let response: ExistsResponse = self
            .expect_json(self.get("/api/users/exists").query(&[("query", query)]))
            .await?;
        Ok(response.exists)
    }
}
