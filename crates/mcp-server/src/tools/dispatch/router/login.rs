use super::super::SeatsurfingService;
use super::error::ToolOutcome;
use crate::tools::schemas::login::LoginRequest;
use seatsurfing_client::config::{EMAIL_ENV, ORG_ID_ENV, PASSWORD_ENV, URL_ENV};
use seatsurfing_client::{Credentials, SeatsurfingClient, SeatsurfingError};

/// Log in, preferring explicit arguments over env vars over `config.json`.
pub(in crate::tools::dispatch) async fn login(
    service: &SeatsurfingService,
    request: LoginRequest,
) -> ToolOutcome {
    let from_args = Credentials {
        url: request.url,
        email: request.email,
        password: request.password,
        organization_id: request.organization_id,
    };
    let credentials = from_args.or(Credentials::resolve(service.data_dir()));
    login_with(service, credentials).await
}

/// Replace the session with a fresh login. The previous session is dropped first, so a failed
/// attempt leaves the service unconfigured.
pub(in crate::tools::dispatch) async fn login_with(
    service: &SeatsurfingService,
    credentials: Credentials,
) -> ToolOutcome {
    let mut slot = service.session_slot().await;
    *slot = None;

    let url = credentials.url.ok_or(SeatsurfingError::MissingCredential {
        field: "url",
        env: URL_ENV,
    })?;
    let email = credentials.email.ok_or(SeatsurfingError::MissingCredential {
        field: "email",
        env: EMAIL_ENV,
    })?;
    let password = credentials
        .password
        .ok_or(SeatsurfingError::MissingCredential {
            field: "password",
            env: PASSWORD_ENV,
        })?;
    let organization_id =
        credentials
            .organization_id
            .ok_or(SeatsurfingError::MissingCredential {
                field: "organization_id",
                env: ORG_ID_ENV,
            })?;

    let mut client = SeatsurfingClient::new(&url)?;
    client.login(&email, &password, &organization_id).await?;
    // Keep the tokens even if the profile lookup below fails.
    let client = slot.insert(client);
    let user = client.get_me().await?;

    Ok(format!(
        "Successfully logged in as {}",
        user.email.as_deref().unwrap_or("unknown")
    ))
}
