use super::super::SeatsurfingService;
use super::error::into_call_result;
use crate::tools::schemas::booking::{CancelBookingRequest, CreateBookingRequest};
use crate::tools::schemas::location::{
    CheckAvailabilityRequest, ListSpacesRequest, ViewAvailabilityRequest,
};
use crate::tools::schemas::login::LoginRequest;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp::{tool, tool_router, ErrorData as McpError};

pub(super) fn build_tool_router() -> ToolRouter<SeatsurfingService> {
    SeatsurfingService::tool_router()
}

#[tool_router]
impl SeatsurfingService {
    #[tool(
        name = "seatsurfing_login",
        description = "Login to Seatsurfing with email and password. Required before using other tools (unless auto-login via environment variables is configured)."
    )]
    pub async fn login(
        &self,
        Parameters(request): Parameters<LoginRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(super::login::login(self, request).await))
    }

    #[tool(
        name = "seatsurfing_list_locations",
        description = "List all available locations (buildings/floors) where spaces can be booked."
    )]
    pub async fn list_locations(&self) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(
            super::locations::list_locations(self).await,
        ))
    }

    #[tool(
        name = "seatsurfing_list_spaces",
        description = "List all spaces (desks/rooms) in a specific location. Requires location_id."
    )]
    pub async fn list_spaces(
        &self,
        Parameters(request): Parameters<ListSpacesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(
            super::locations::list_spaces(self, request).await,
        ))
    }

    #[tool(
        name = "seatsurfing_check_availability",
        description = "Check which spaces are available in a location for a specific time period. Requires location_id, start_time and end_time."
    )]
    pub async fn check_availability(
        &self,
        Parameters(request): Parameters<CheckAvailabilityRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(
            super::availability::check_availability(self, request).await,
        ))
    }

    #[tool(
        name = "seatsurfing_create_booking",
        description = "Create a new booking for a space (desk/room) at a specific time. Requires space_id, start_time and end_time."
    )]
    pub async fn create_booking(
        &self,
        Parameters(request): Parameters<CreateBookingRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(
            super::bookings::create_booking(self, request).await,
        ))
    }

    #[tool(
        name = "seatsurfing_list_my_bookings",
        description = "List all upcoming bookings for the current user."
    )]
    pub async fn list_my_bookings(&self) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(
            super::bookings::list_my_bookings(self).await,
        ))
    }

    #[tool(
        name = "seatsurfing_cancel_booking",
        description = "Cancel an existing booking by its ID. Requires booking_id."
    )]
    pub async fn cancel_booking(
        &self,
        Parameters(request): Parameters<CancelBookingRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(
            super::bookings::cancel_booking(self, request).await,
        ))
    }

    #[tool(
        name = "seatsurfing_refresh_spaces",
        description = "Refresh the cached list of locations and bookable spaces. Run this after setup or when spaces have changed."
    )]
    pub async fn refresh_spaces(&self) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(
            super::spaces_cache::refresh_spaces(self).await,
        ))
    }

    #[tool(
        name = "seatsurfing_view_availability",
        description = "List all cached spaces in a location grouped by availability status. Requires location_id; pass start_time and end_time to check live availability."
    )]
    pub async fn view_availability(
        &self,
        Parameters(request): Parameters<ViewAvailabilityRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(
            super::spaces_cache::view_availability(self, request).await,
        ))
    }
}
