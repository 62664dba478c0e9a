//! Plain-text rendering of API results.

use seatsurfing_client::{
    format_datetime, render_spaces_list, Booking, Location, Snapshot, Space, SpaceAvailability,
};
use std::collections::HashMap;

pub(crate) fn locations(locations: &[Location]) -> String {
    if locations.is_empty() {
        return "No locations found.".to_string();
    }

    let mut lines = vec![format!("Found {} location(s):\n", locations.len())];
    for location in locations {
        let description = location
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(|d| format!("\n\t{d}"))
            .unwrap_or_default();
        lines.push(format!(
            "- {} (ID: {}){description}",
            location.name, location.id
        ));
    }
    lines.join("\n")
}

pub(crate) fn spaces(spaces: &[Space]) -> String {
    if spaces.is_empty() {
        return "No spaces found in this location.".to_string();
    }

    let mut lines = vec![format!("Found {} space(s):\n", spaces.len())];
    lines.extend(
        spaces
            .iter()
            .map(|space| format!("- {} (ID: {})", space.name, space.id)),
    );
    lines.join("\n")
}

/// Availability in remote order, available spaces (with ids) before occupied ones.
pub(crate) fn availability(rows: &[SpaceAvailability], enter: &str, leave: &str) -> String {
    let (available, occupied): (Vec<_>, Vec<_>) = rows.iter().partition(|row| row.available);

    let mut lines = vec![format!(
        "Availability for {} to {}:\n",
        format_datetime(enter),
        format_datetime(leave)
    )];
    if !available.is_empty() {
        lines.push(format!("Available ({}):", available.len()));
        lines.extend(
            available
                .iter()
                .map(|row| format!("\t- {} (ID: {})", row.name, row.id)),
        );
        lines.push(String::new());
    }
    if !occupied.is_empty() {
        lines.push(format!("Occupied ({}):", occupied.len()));
        lines.extend(occupied.iter().map(|row| format!("\t- {}", row.name)));
    }
    if available.is_empty() && occupied.is_empty() {
        lines.push("No spaces found in this location.".to_string());
    }
    lines.join("\n")
}

pub(crate) fn booking_created(booking_id: &str, enter: &str, leave: &str) -> String {
    format!(
        "Booking created successfully!\n\nBooking ID: {booking_id}\nTime: {} to {}",
        format_datetime(enter),
        format_datetime(leave)
    )
}

pub(crate) fn bookings(bookings: &[Booking]) -> String {
    if bookings.is_empty() {
        return "You have no upcoming bookings.".to_string();
    }

    let mut blocks = vec![format!("Your upcoming bookings ({}):\n", bookings.len())];
    for booking in bookings {
        let mut block = format!(
            "- {}\n\tID: {}\n\tTime: {} -> {}",
            booking.space_display_name(),
            booking.id,
            format_datetime(&booking.enter),
            format_datetime(&booking.leave)
        );
        if let Some(subject) = booking.subject.as_deref().filter(|s| !s.trim().is_empty()) {
            block.push_str(&format!("\n\tSubject: {subject}"));
        }
        blocks.push(block);
    }
    blocks.join("\n\n")
}

pub(crate) fn cache_refreshed(snapshot: &Snapshot) -> String {
    let mut lines = vec![format!(
        "Refreshed cache with {} location(s) and {} space(s):\n",
        snapshot.locations.len(),
        snapshot.total_spaces()
    )];
    for location in &snapshot.locations {
        lines.push(format!(
            "- {}: {} space(s)",
            location.name,
            snapshot.spaces_for(&location.id).len()
        ));
    }
    lines.join("\n")
}

/// Header plus the two-section cached listing. `window` is `Some((enter, leave))` when live
/// availability was fetched.
pub(crate) fn cached_layout(
    location_name: &str,
    spaces: &[Space],
    availability: &HashMap<String, bool>,
    window: Option<(&str, &str)>,
) -> String {
    let time_info = match window {
        Some((enter, leave)) => format!(
            "Time: {} to {}\n",
            format_datetime(enter),
            format_datetime(leave)
        ),
        None => "(availability not checked - provide start_time and end_time)\n".to_string(),
    };
    format!(
        "Location: {location_name}\n{time_info}\n{}",
        render_spaces_list(spaces, availability)
    )
}
