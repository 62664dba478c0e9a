use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Request for `seatsurfing_login`.
///
/// Every field is optional: missing values fall back to `SEATSURFING_*` environment variables and
/// then to `config.json` in the data directory.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct LoginRequest {
    #[schemars(
        description = "Base URL of the Seatsurfing instance (e.g., https://seatsurfing.example.com). Only needed if SEATSURFING_URL is not set."
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[schemars(description = "User email address. Only needed if SEATSURFING_EMAIL is not set.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[schemars(description = "User password. Only needed if SEATSURFING_PASSWORD is not set.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[schemars(description = "Organization ID. Only needed if SEATSURFING_ORG_ID is not set.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}
