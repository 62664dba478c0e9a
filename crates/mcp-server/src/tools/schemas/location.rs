use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct ListSpacesRequest {
    /// Location to list (required)
    #[schemars(description = "ID of the location. Use seatsurfing_list_locations to get IDs.")]
    #[serde(default)]
    pub location_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct CheckAvailabilityRequest {
    #[schemars(description = "ID of the location to check.")]
    #[serde(default)]
    pub location_id: Option<String>,

    #[schemars(description = "Start time (ISO format or YYYY-MM-DD HH:MM).")]
    #[serde(default)]
    pub start_time: Option<String>,

    #[schemars(description = "End time (ISO format or YYYY-MM-DD HH:MM).")]
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Cached layout for one location, optionally overlaid with live availability.
///
/// Only `location_id` is required. Availability is fetched when both times are given.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct ViewAvailabilityRequest {
    #[schemars(description = "ID of the location. Use seatsurfing_list_locations to get IDs.")]
    #[serde(default)]
    pub location_id: Option<String>,

    #[schemars(description = "Start time to check availability (YYYY-MM-DD HH:MM).")]
    #[serde(default)]
    pub start_time: Option<String>,

    #[schemars(description = "End time to check availability (YYYY-MM-DD HH:MM).")]
    #[serde(default)]
    pub end_time: Option<String>,
}
