pub(crate) const LOGIN: &str = "seatsurfing_login";
pub(crate) const LIST_LOCATIONS: &str = "seatsurfing_list_locations";
pub(crate) const LIST_SPACES: &str = "seatsurfing_list_spaces";
pub(crate) const CHECK_AVAILABILITY: &str = "seatsurfing_check_availability";
pub(crate) const CREATE_BOOKING: &str = "seatsurfing_create_booking";
pub(crate) const LIST_MY_BOOKINGS: &str = "seatsurfing_list_my_bookings";
pub(crate) const CANCEL_BOOKING: &str = "seatsurfing_cancel_booking";
pub(crate) const REFRESH_SPACES: &str = "seatsurfing_refresh_spaces";
pub(crate) const VIEW_AVAILABILITY: &str = "seatsurfing_view_availability";

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: LOGIN,
        summary: "Log in (arguments override env vars and config.json).",
    },
    ToolDescriptor {
        name: LIST_LOCATIONS,
        summary: "Buildings/floors with their IDs.",
    },
    ToolDescriptor {
        name: LIST_SPACES,
        summary: "Desks/rooms in one location.",
    },
    ToolDescriptor {
        name: CHECK_AVAILABILITY,
        summary: "Live availability for a location and time range.",
    },
    ToolDescriptor {
        name: CREATE_BOOKING,
        summary: "Book a space for a time range.",
    },
    ToolDescriptor {
        name: LIST_MY_BOOKINGS,
        summary: "Your upcoming bookings.",
    },
    ToolDescriptor {
        name: CANCEL_BOOKING,
        summary: "Cancel a booking by ID.",
    },
    ToolDescriptor {
        name: REFRESH_SPACES,
        summary: "Rebuild the local location/space cache.",
    },
    ToolDescriptor {
        name: VIEW_AVAILABILITY,
        summary: "Cached layout of a location, optionally with live availability.",
    },
];

pub(crate) fn server_instructions() -> String {
    let mut out = String::from(
        "Seatsurfing booking tools. Log in first (or configure SEATSURFING_URL, SEATSURFING_EMAIL, SEATSURFING_PASSWORD, SEATSURFING_ORG_ID for auto-login). Times accept ISO-8601 or YYYY-MM-DD HH:MM.\n",
    );
    for tool in TOOL_CATALOG {
        out.push_str(&format!("- {}: {}\n", tool.name, tool.summary));
    }
    out
}
