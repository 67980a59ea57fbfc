use crate::client::Client;
use crate::error::BackendError;
use common::user::AuthResponse;
use serde_json::json;

impl Client {
    /// `POST /api/register` - on success the returned token and profile are
    /// stored in the session.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, BackendError> {
        let body = json!({ "name": name, "email": email, "password": password });
        let auth: AuthResponse = self.expect_json(self.post("/api/register").json(&body)).await?;

        self.with_session(|s| s.set_auth(auth.token.clone(), auth.user.clone()));
        log::debug!("Registered user {}", auth.user.id);
        Ok(auth)
    }

    /// `POST /api/login` - on success the returned token and profile are
    /// stored in the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, BackendError> {
        let body = json!({ "email": email, "password": password });
        let auth: AuthResponse = self.expect_json(self.post("/api/login").json(&body)).await?;

        self.with_session(|s| s.set_auth(auth.token.clone(), auth.user.clone()));
        log::debug!("Logged in as {}", auth.user.id);
        Ok(auth)
    }

    pub async fn verify_email(&self, code: &str) -> Result<(), BackendError> {
        let body = json!({ "code": code });
        let _: serde_json::Value = self
            .expect_json(self.post("/api/verify-email").json(&body))
            .await?;
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), BackendError> {
        let body = json!({ "email": email });
        let _: serde_json::Value = self
            .expect_json(self.post("/api/forgot-password").json(&body))
            .await?;
        Ok(())
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), BackendError> {
        let body = json!({ "token": token, "password": password });
        let _: serde_json::Value = self
            .expect_json(self.post("/api/reset-password").json(&body))
            .await?;
        Ok(())
    }

    pub async fn resend_activation(&self) -> Result<(), BackendError> {
        let _: serde_json::Value = self
            .expect_json(self.post("/api/resend-activation"))
            .await?;
        Ok(())
    }

    /// Drop the local auth state. Purely client-side, like the original
    /// logout: the backend keeps no session to invalidate.
    pub fn logout(&self) {
        self.with_session(|s| s.clear());
    }
}
