use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parking space as reported by the core service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub code: String,
    pub occupied: bool,
    #[serde(default)]
    pub plate: Option<String>,
}

/// One check-in/check-out record. `check_out_at` and `amount` are unset
/// while the vehicle is still inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub plate: String,
    pub slot_code: String,
    pub check_in_at: DateTime<Utc>,
    #[serde(default)]
    pub check_out_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl SessionRecord {
    pub fn is_active(&self) -> bool {
        self.check_out_at.is_none()
    }
}

/// Aggregated occupancy figures from `GET /stats/overview`. Field names
/// on the wire are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOverview {
    pub occupied: u32,
    pub free: u32,
    #[serde(rename = "activeVehicles")]
    pub active_vehicles: u32,
    #[serde(rename = "occupancyPercent")]
    pub occupancy_percent: f64,
    #[serde(rename = "currentRatePerMinute")]
    pub current_rate_per_minute: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryReceipt {
    pub plate: String,
    pub slot_code: String,
    pub check_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitReceipt {
    pub plate: String,
    pub slot_code: String,
    pub minutes: i64,
    pub amount: f64,
    pub check_out_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "accessCode")]
    pub access_code: String,
}

/// Login response from the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtResponse {
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// The locally persisted session, replacing the browser localStorage token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub username: String,
    pub saved_at: DateTime<Utc>,
}
