use crate::core::client::body_message;
use crate::domain::model::{JwtResponse, RegisterRequest};
use crate::domain::ports::AuthApi;
use crate::utils::error::{ParkingError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};

/// HTTP client for the auth service (`/api/auth`).
pub struct AuthClient {
    base_url: String,
    client: Client,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn auth_error(response: Response, fallback: &str) -> ParkingError {
        let body = response.text().await.unwrap_or_default();
        ParkingError::AuthError {
            message: body_message(&body, fallback),
        }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, username: &str, password: &str) -> Result<JwtResponse> {
        let url = format!("{}/login", self.base_url);
        tracing::debug!("POST {} (username={})", url, username);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::auth_error(
                response,
                "Verify your credentials or the backend status",
            )
            .await);
        }

        Ok(response.json::<JwtResponse>().await?)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let url = format!("{}/register", self.base_url);
        tracing::debug!("POST {} (username={})", url, request.username);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response, "Registration failed").await);
        }

        Ok(())
    }
}
