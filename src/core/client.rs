use crate::domain::model::{EntryReceipt, ExitReceipt, SessionRecord, Slot, StatsOverview};
use crate::domain::ports::CoreApi;
use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::validate_range;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// HTTP client for the parking core service (`/api/core`).
///
/// Attaches the bearer token when one is present; the backends decide
/// whether a route actually requires it.
#[derive(Debug)]
pub struct CoreClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl CoreClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: Client::new(),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Map a non-success response into a `CoreServiceError`, preferring the
/// backend's own message over the raw body.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = body_message(
        &body,
        status.canonical_reason().unwrap_or("request failed"),
    );

    Err(ParkingError::CoreServiceError {
        status: status.as_u16(),
        message,
    })
}

/// Extract a readable message from an error body: the backend's own
/// `detail`/`message` field when present, the raw body otherwise, and the
/// given fallback when the body is empty.
pub(crate) fn body_message(body: &str, fallback: &str) -> String {
    error_detail(body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            fallback.to_string()
        } else {
            body.trim().to_string()
        }
    })
}

/// FastAPI wraps errors as `{"detail": ...}`, Spring as `{"message": ...}`.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .or_else(|| value.get("message"))?
        .as_str()
        .map(str::to_string)
}

#[async_trait]
impl CoreApi for CoreClient {
    async fn overview(&self) -> Result<StatsOverview> {
        let url = format!("{}/stats/overview", self.base_url);
        tracing::debug!("GET {}", url);
        let response = self.authorize(self.client.get(&url)).send().await?;
        self.decode(response).await
    }

    async fn recent_sessions(&self, limit: usize) -> Result<Vec<SessionRecord>> {
        validate_range("limit", limit, 1, 50)?;
        let url = format!("{}/sessions", self.base_url);
        tracing::debug!("GET {} (limit={})", url, limit);
        let response = self
            .authorize(self.client.get(&url))
            .query(&[("limit", limit.to_string()), ("order", "desc".to_string())])
            .send()
            .await?;
        self.decode(response).await
    }

    async fn slots(&self) -> Result<Vec<Slot>> {
        let url = format!("{}/slots", self.base_url);
        tracing::debug!("GET {}", url);
        let response = self.authorize(self.client.get(&url)).send().await?;
        self.decode(response).await
    }

    async fn register_entry(&self, plate: &str) -> Result<EntryReceipt> {
        let url = format!("{}/entries", self.base_url);
        tracing::debug!("POST {} (plate={})", url, plate);
        let response = self
            .authorize(self.client.post(&url))
            .json(&serde_json::json!({ "plate": plate }))
            .send()
            .await?;
        self.decode(response).await
    }

    async fn register_exit(&self, plate: &str) -> Result<ExitReceipt> {
        let url = format!("{}/exits", self.base_url);
        tracing::debug!("POST {} (plate={})", url, plate);
        let response = self
            .authorize(self.client.post(&url))
            .json(&serde_json::json!({ "plate": plate }))
            .send()
            .await?;
        self.decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_overview_decodes_camel_case_stats() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/core/stats/overview");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "occupied": 3,
                    "free": 2,
                    "activeVehicles": 3,
                    "occupancyPercent": 60.0,
                    "currentRatePerMinute": 0.05
                }));
        });

        let client = CoreClient::new(server.url("/api/core"), None);
        let stats = client.overview().await.unwrap();

        api_mock.assert();
        assert_eq!(stats.occupied, 3);
        assert_eq!(stats.free, 2);
        assert_eq!(stats.active_vehicles, 3);
        assert!((stats.occupancy_percent - 60.0).abs() < f64::EPSILON);
        assert!((stats.current_rate_per_minute - 0.05).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_recent_sessions_sends_limit_and_order() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/core/sessions")
                .query_param("limit", "5")
                .query_param("order", "desc");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {
                        "plate": "ABC-123",
                        "slot_code": "A01",
                        "check_in_at": "2026-08-27T10:00:00Z",
                        "check_out_at": null,
                        "amount": null
                    }
                ]));
        });

        let client = CoreClient::new(server.url("/api/core"), None);
        let sessions = client.recent_sessions(5).await.unwrap();

        api_mock.assert();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].plate, "ABC-123");
        assert!(sessions[0].is_active());
    }

    #[tokio::test]
    async fn test_recent_sessions_rejects_out_of_range_limit() {
        let client = CoreClient::new("http://localhost:1", None);
        let err = client.recent_sessions(0).await.unwrap_err();
        assert!(matches!(
            err,
            ParkingError::InvalidConfigValueError { .. }
        ));
        let err = client.recent_sessions(51).await.unwrap_err();
        assert!(matches!(
            err,
            ParkingError::InvalidConfigValueError { .. }
        ));
    }

    #[tokio::test]
    async fn test_register_entry_maps_conflict_detail() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/core/entries");
            then.status(409)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "No slots available"}));
        });

        let client = CoreClient::new(server.url("/api/core"), None);
        let err = client.register_entry("ABC-123").await.unwrap_err();

        api_mock.assert();
        match err {
            ParkingError::CoreServiceError { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "No slots available");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_exit_maps_missing_session_detail() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/core/exits");
            then.status(404)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "Active session not found"}));
        });

        let client = CoreClient::new(server.url("/api/core"), None);
        let err = client.register_exit("ABC-123").await.unwrap_err();

        api_mock.assert();
        match err {
            ParkingError::CoreServiceError { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Active session not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_token_is_sent_as_bearer_header() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/core/slots")
                .header("Authorization", "Bearer secret-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let client = CoreClient::new(server.url("/api/core"), Some("secret-token".to_string()));
        let slots = client.slots().await.unwrap();

        api_mock.assert();
        assert!(slots.is_empty());
    }

    #[test]
    fn test_error_detail_shapes() {
        assert_eq!(
            error_detail(r#"{"detail": "No slots available"}"#).as_deref(),
            Some("No slots available")
        );
        assert_eq!(
            error_detail(r#"{"message": "Invalid access code"}"#).as_deref(),
            Some("Invalid access code")
        );
        assert_eq!(error_detail("plain text"), None);
        assert_eq!(error_detail(r#"{"detail": 42}"#), None);
    }

    #[test]
    fn test_body_message_fallback_order() {
        // Structured field beats raw body beats fallback.
        assert_eq!(
            body_message(r#"{"detail": "No slots available"}"#, "request failed"),
            "No slots available"
        );
        assert_eq!(body_message(" plain text ", "request failed"), "plain text");
        assert_eq!(body_message("", "request failed"), "request failed");
        assert_eq!(body_message("  \n", "request failed"), "request failed");
    }
}
