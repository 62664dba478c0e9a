use super::super::{required, require_client, SeatsurfingService};
use super::error::ToolOutcome;
use crate::tools::render;
use crate::tools::schemas::booking::{CancelBookingRequest, CreateBookingRequest};
use seatsurfing_client::parse_datetime;

pub(in crate::tools::dispatch) async fn create_booking(
    service: &SeatsurfingService,
    request: CreateBookingRequest,
) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    let client = require_client(&mut slot)?;
    let space_id = required(&request.space_id, "space_id")?;
    let enter = parse_datetime(required(&request.start_time, "start_time")?)?;
    let leave = parse_datetime(required(&request.end_time, "end_time")?)?;
    let subject = request.subject.as_deref().unwrap_or_default();

    let booking_id = client
        .create_booking(space_id, &enter, &leave, subject)
        .await?;
    Ok(render::booking_created(&booking_id, &enter, &leave))
}

pub(in crate::tools::dispatch) async fn list_my_bookings(
    service: &SeatsurfingService,
) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    let client = require_client(&mut slot)?;
    let bookings = client.get_my_bookings().await?;
    Ok(render::bookings(&bookings))
}

pub(in crate::tools::dispatch) async fn cancel_booking(
    service: &SeatsurfingService,
    request: CancelBookingRequest,
) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    let client = require_client(&mut slot)?;
    let booking_id = required(&request.booking_id, "booking_id")?;

    client.delete_booking(booking_id).await?;
    Ok(format!("Booking {booking_id} has been cancelled."))
}
