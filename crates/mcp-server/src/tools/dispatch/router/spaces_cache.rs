use super::super::{required, require_client, SeatsurfingService};
use super::error::ToolOutcome;
use crate::tools::render;
use crate::tools::schemas::location::ViewAvailabilityRequest;
use seatsurfing_client::parse_datetime;
use std::collections::HashMap;

pub(in crate::tools::dispatch) async fn refresh_spaces(service: &SeatsurfingService) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    let client = require_client(&mut slot)?;
    let snapshot = service.cache().refresh(client).await?;
    Ok(render::cache_refreshed(&snapshot))
}

/// Cached layout for a location. Live availability is overlaid only when both times are given;
/// spaces the server does not report are shown as available.
pub(in crate::tools::dispatch) async fn view_availability(
    service: &SeatsurfingService,
    request: ViewAvailabilityRequest,
) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    let client = require_client(&mut slot)?;
    let location_id = required(&request.location_id, "location_id")?;

    let Some(snapshot) = service.cache().load() else {
        return Ok("No spaces cache found. Run seatsurfing_refresh_spaces first.".to_string());
    };
    let spaces = snapshot.spaces_for(location_id);
    if spaces.is_empty() {
        return Ok(format!(
            "No spaces found for location {location_id}. Check location_id or refresh cache."
        ));
    }
    let location_name = snapshot.location_name(location_id).unwrap_or(location_id);

    let start = request.start_time.as_deref().filter(|v| !v.trim().is_empty());
    let end = request.end_time.as_deref().filter(|v| !v.trim().is_empty());
    let text = match (start, end) {
        (Some(start), Some(end)) => {
            let enter = parse_datetime(start)?;
            let leave = parse_datetime(end)?;
            let availability: HashMap<String, bool> = client
                .get_space_availability(location_id, &enter, &leave)
                .await?
                .into_iter()
                .map(|row| (row.id, row.available))
                .collect();
            render::cached_layout(
                location_name,
                spaces,
                &availability,
                Some((enter.as_str(), leave.as_str())),
            )
        }
        _ => render::cached_layout(location_name, spaces, &HashMap::new(), None),
    };
    Ok(text)
}
