use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct CreateBookingRequest {
    #[schemars(
        description = "ID of the space to book. Use seatsurfing_check_availability to find available spaces."
    )]
    #[serde(default)]
    pub space_id: Option<String>,

    #[schemars(description = "Start time of the booking (YYYY-MM-DD HH:MM).")]
    #[serde(default)]
    pub start_time: Option<String>,

    #[schemars(description = "End time of the booking (YYYY-MM-DD HH:MM).")]
    #[serde(default)]
    pub end_time: Option<String>,

    #[schemars(description = "Optional subject/reason for the booking.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct CancelBookingRequest {
    #[schemars(
        description = "ID of the booking to cancel. Use seatsurfing_list_my_bookings to find IDs."
    )]
    #[serde(default)]
    pub booking_id: Option<String>,
}
