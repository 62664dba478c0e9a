use super::super::{required, require_client, SeatsurfingService};
use super::error::ToolOutcome;
use crate::tools::render;
use crate::tools::schemas::location::CheckAvailabilityRequest;
use seatsurfing_client::parse_datetime;

/// Live availability for a location, split into available and occupied spaces.
pub(in crate::tools::dispatch) async fn check_availability(
    service: &SeatsurfingService,
    request: CheckAvailabilityRequest,
) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    let client = require_client(&mut slot)?;
    let location_id = required(&request.location_id, "location_id")?;
    let enter = parse_datetime(required(&request.start_time, "start_time")?)?;
    let leave = parse_datetime(required(&request.end_time, "end_time")?)?;

    let rows = client
        .get_space_availability(location_id, &enter, &leave)
        .await?;
    Ok(render::availability(&rows, &enter, &leave))
}
