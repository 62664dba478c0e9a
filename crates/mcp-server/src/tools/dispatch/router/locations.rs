use super::super::{required, require_client, SeatsurfingService};
use super::error::ToolOutcome;
use crate::tools::render;
use crate::tools::schemas::location::ListSpacesRequest;

pub(in crate::tools::dispatch) async fn list_locations(service: &SeatsurfingService) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    let client = require_client(&mut slot)?;
    let locations = client.get_locations().await?;
    Ok(render::locations(&locations))
}

pub(in crate::tools::dispatch) async fn list_spaces(
    service: &SeatsurfingService,
    request: ListSpacesRequest,
) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    let client = require_client(&mut slot)?;
    let location_id = required(&request.location_id, "location_id")?;

    let spaces = client.get_spaces(location_id).await?;
    Ok(render::spaces(&spaces))
}
