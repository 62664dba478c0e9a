//! MCP tool dispatch for Seatsurfing
//!
//! One [`SeatsurfingService`] per process. It owns the single account session and the space
//! cache; every tool call locks the session for its whole duration, so calls run one at a time.

use super::catalog;
use super::schemas::booking::{CancelBookingRequest, CreateBookingRequest};
use super::schemas::location::{
    CheckAvailabilityRequest, ListSpacesRequest, ViewAvailabilityRequest,
};
use super::schemas::login::LoginRequest;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};
use seatsurfing_client::{
    Credentials, DataDir, SeatsurfingClient, SeatsurfingError, SessionState, SpaceCache,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

mod router;

#[cfg(test)]
mod tests;

use router::error::{into_call_result, ToolOutcome};

/// Seatsurfing MCP Service
#[derive(Clone)]
pub struct SeatsurfingService {
    /// Tool router
    tool_router: ToolRouter<Self>,
    /// Session and cache state (per-process)
    state: Arc<ServiceState>,
}

struct ServiceState {
    data_dir: DataDir,
    cache: SpaceCache,
    session: Mutex<Option<SeatsurfingClient>>,
}

impl Default for SeatsurfingService {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatsurfingService {
    pub fn new() -> Self {
        Self::with_data_dir(DataDir::from_env())
    }

    pub fn with_data_dir(data_dir: DataDir) -> Self {
        let cache = SpaceCache::new(data_dir.spaces_cache_path());
        Self {
            tool_router: router::build_tool_router(),
            state: Arc::new(ServiceState {
                data_dir,
                cache,
                session: Mutex::new(None),
            }),
        }
    }

    pub fn data_dir(&self) -> &DataDir {
        &self.state.data_dir
    }

    pub async fn session_state(&self) -> SessionState {
        match self.state.session.lock().await.as_ref() {
            Some(client) => client.state(),
            None => SessionState::Unconfigured,
        }
    }

    /// Log in from environment/config credentials when all four are available.
    ///
    /// Returns `true` on success. Failures are logged and leave the service unconfigured.
    pub async fn auto_login(&self) -> bool {
        let credentials = Credentials::resolve(&self.state.data_dir);
        if !credentials.is_complete() {
            log::info!("Auto-login skipped: credentials not configured");
            return false;
        }
        match router::login::login_with(self, credentials).await {
            Ok(message) => {
                log::info!("Auto-login: {message}");
                true
            }
            Err(err) => {
                log::warn!("Auto-login failed: {err}");
                false
            }
        }
    }

    /// Run a tool by name with a JSON argument object.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> CallToolResult {
        into_call_result(self.dispatch_outcome(name, arguments).await)
    }

    async fn dispatch_outcome(&self, name: &str, arguments: Value) -> ToolOutcome {
        match name {
            catalog::LOGIN => {
                router::login::login(self, parse_arguments::<LoginRequest>(arguments)?).await
            }
            catalog::LIST_LOCATIONS => router::locations::list_locations(self).await,
            catalog::LIST_SPACES => {
                router::locations::list_spaces(
                    self,
                    parse_arguments::<ListSpacesRequest>(arguments)?,
                )
                .await
            }
            catalog::CHECK_AVAILABILITY => {
                router::availability::check_availability(
                    self,
                    parse_arguments::<CheckAvailabilityRequest>(arguments)?,
                )
                .await
            }
            catalog::CREATE_BOOKING => {
                router::bookings::create_booking(
                    self,
                    parse_arguments::<CreateBookingRequest>(arguments)?,
                )
                .await
            }
            catalog::LIST_MY_BOOKINGS => router::bookings::list_my_bookings(self).await,
            catalog::CANCEL_BOOKING => {
                router::bookings::cancel_booking(
                    self,
                    parse_arguments::<CancelBookingRequest>(arguments)?,
                )
                .await
            }
            catalog::REFRESH_SPACES => router::spaces_cache::refresh_spaces(self).await,
            catalog::VIEW_AVAILABILITY => {
                router::spaces_cache::view_availability(
                    self,
                    parse_arguments::<ViewAvailabilityRequest>(arguments)?,
                )
                .await
            }
            other => Err(SeatsurfingError::UnknownTool(other.to_string())),
        }
    }

    pub(in crate::tools::dispatch) fn cache(&self) -> &SpaceCache {
        &self.state.cache
    }

    pub(in crate::tools::dispatch) async fn session_slot(
        &self,
    ) -> MutexGuard<'_, Option<SeatsurfingClient>> {
        self.state.session.lock().await
    }
}

/// The logged-in client, or the "please login" error while unconfigured.
pub(in crate::tools::dispatch) fn require_client(
    slot: &mut Option<SeatsurfingClient>,
) -> Result<&mut SeatsurfingClient, SeatsurfingError> {
    match slot {
        Some(client) if client.is_authenticated() => Ok(client),
        _ => Err(SeatsurfingError::Authentication(
            "Not logged in - please login first with seatsurfing_login \
             (or set SEATSURFING_URL, SEATSURFING_EMAIL, SEATSURFING_PASSWORD and SEATSURFING_ORG_ID)"
                .to_string(),
        )),
    }
}

/// Required string argument; blank values count as missing.
pub(in crate::tools::dispatch) fn required<'a>(
    value: &'a Option<String>,
    field: &str,
) -> Result<&'a str, SeatsurfingError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SeatsurfingError::InvalidArgument(field.to_string()))
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, SeatsurfingError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    Ok(serde_json::from_value(arguments)?)
}

#[tool_handler]
impl ServerHandler for SeatsurfingService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::server_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
