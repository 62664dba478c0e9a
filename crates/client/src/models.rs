//! Wire types for the Seatsurfing REST API.
//!
//! Response types are lenient: unknown fields are ignored and optional layout fields default to
//! zero, so minor server-side schema drift does not break the tools.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// One row of `GET /location/{id}/space/availability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceAvailability {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSpace {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub space_id: Option<String>,
    pub enter: String,
    pub leave: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub space: Option<BookingSpace>,
}

impl Booking {
    /// Embedded space name, then the raw space id, then "Unknown".
    pub fn space_display_name(&self) -> &str {
        self.space
            .as_ref()
            .map(|space| space.name.as_str())
            .or(self.space_id.as_deref())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest<'a> {
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
    pub(crate) organization_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshRequest<'a> {
    pub(crate) refresh_token: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub space_id: String,
    pub enter: String,
    pub leave: String,
    pub subject: String,
    pub user_email: String,
}
