use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{Duration, Utc};
use seatsurfing_client::{SeatsurfingClient, SeatsurfingError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockState {
    refresh_calls: AtomicUsize,
    refresh_rejects: AtomicBool,
    seen_auth: Mutex<Vec<String>>,
    last_booking: Mutex<Option<Value>>,
}

type Shared = Arc<MockState>;

fn record_auth(state: &MockState, headers: &HeaderMap) {
    let value = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    state.seen_auth.lock().unwrap().push(value);
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "secret" && body["organizationId"] == "org-1" {
        Json(json!({"accessToken": "access-0", "refreshToken": "refresh-0"})).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "bad credentials").into_response()
    }
}

async fn refresh(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let n = state.refresh_calls.fetch_add(1, Ordering::SeqCst) + 1;
    if state.refresh_rejects.load(Ordering::SeqCst) || body["refreshToken"].as_str().is_none() {
        return (StatusCode::UNAUTHORIZED, "expired").into_response();
    }
    Json(json!({"accessToken": format!("access-{n}"), "refreshToken": format!("refresh-{n}")}))
        .into_response()
}

async fn locations(State(state): State<Shared>, headers: HeaderMap) -> Response {
    record_auth(&state, &headers);
    Json(json!([{"id": "loc-1", "name": "HQ", "description": "Main office"}])).into_response()
}

async fn availability(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(location_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    record_auth(&state, &headers);
    Json(json!([
        {"id": "s1", "name": format!("{location_id} desk"), "available": true},
        {"id": "s2", "name": query.get("enter").cloned().unwrap_or_default(), "available": false},
    ]))
    .into_response()
}

async fn create_booking(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    *state.last_booking.lock().unwrap() = Some(body);
    (StatusCode::CREATED, [("X-Object-ID", "booking-42")]).into_response()
}

async fn delete_booking(Path(id): Path<String>) -> Response {
    if id == "missing" {
        (StatusCode::NOT_FOUND, "no such booking").into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn spawn_mock() -> Result<(String, Shared)> {
    let state: Shared = Arc::default();
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/location/", get(locations))
        .route("/location/:id/space/availability", get(availability))
        .route("/booking/", post(create_booking))
        .route("/booking/:id", delete(delete_booking))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind mock api")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}/"), state))
}

async fn logged_in_client(base_url: &str) -> Result<SeatsurfingClient> {
    let mut client = SeatsurfingClient::new(base_url)?;
    client.login("user@example.com", "secret", "org-1").await?;
    Ok(client)
}

#[tokio::test]
async fn login_sets_fourteen_minute_expiry_without_refreshing() -> Result<()> {
    let (url, state) = spawn_mock().await?;
    let before = Utc::now();
    let mut client = logged_in_client(&url).await?;
    let after = Utc::now();

    let expires_at = client.session().expires_at();
    assert!(expires_at >= before + Duration::minutes(14));
    assert!(expires_at <= after + Duration::minutes(14));

    client.ensure_authenticated().await?;
    let locations = client.get_locations().await?;
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].description.as_deref(), Some("Main office"));
    assert_eq!(state.refresh_calls.load(Ordering::SeqCst), 0);
    assert_eq!(*state.seen_auth.lock().unwrap(), vec!["Bearer access-0"]);
    Ok(())
}

#[tokio::test]
async fn rejected_login_is_an_authentication_error_with_status_and_body() -> Result<()> {
    let (url, _state) = spawn_mock().await?;
    let mut client = SeatsurfingClient::new(&url)?;

    let err = client
        .login("user@example.com", "wrong", "org-1")
        .await
        .unwrap_err();

    assert!(err.is_authentication());
    let message = err.to_string();
    assert!(message.contains("401"), "{message}");
    assert!(message.contains("bad credentials"), "{message}");
    assert!(!client.is_authenticated());
    Ok(())
}

#[tokio::test]
async fn nearing_expiry_triggers_exactly_one_refresh() -> Result<()> {
    let (url, state) = spawn_mock().await?;
    let mut client = logged_in_client(&url).await?;
    let expires_at = client.session().expires_at();

    client
        .ensure_authenticated_at(expires_at - Duration::seconds(30))
        .await?;
    assert_eq!(state.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(client.session().access_token(), Some("access-1"));

    // The refresh resets the clock, so a normal call goes straight through.
    client.get_locations().await?;
    assert_eq!(state.refresh_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        state.seen_auth.lock().unwrap().last().map(String::as_str),
        Some("Bearer access-1")
    );
    Ok(())
}

#[tokio::test]
async fn refresh_failure_clears_tokens_and_stops_further_refreshes() -> Result<()> {
    let (url, state) = spawn_mock().await?;
    let mut client = logged_in_client(&url).await?;
    state.refresh_rejects.store(true, Ordering::SeqCst);

    let err = client
        .ensure_authenticated_at(Utc::now() + Duration::minutes(20))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("please login again"));
    assert!(client.session().access_token().is_none());
    assert!(client.session().refresh_token().is_none());
    assert!(!client.is_authenticated());

    let err = client.ensure_authenticated().await.unwrap_err();
    assert!(matches!(err, SeatsurfingError::Authentication(_)));
    assert_eq!(state.refresh_calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn availability_query_is_url_encoded() -> Result<()> {
    let (url, _state) = spawn_mock().await?;
    let mut client = logged_in_client(&url).await?;

    let rows = client
        .get_space_availability("loc-1", "2024-03-01T09:00:00.000Z", "2024-03-01T17:00:00.000Z")
        .await?;

    assert_eq!(rows.len(), 2);
    assert!(rows[0].available);
    assert!(!rows[1].available);
    assert_eq!(rows[1].name, "2024-03-01T09:00:00.000Z");
    Ok(())
}

#[tokio::test]
async fn create_booking_returns_header_id_and_sends_camel_case_body() -> Result<()> {
    let (url, state) = spawn_mock().await?;
    let mut client = logged_in_client(&url).await?;

    let id = client
        .create_booking(
            "s1",
            "2024-03-01T09:00:00.000Z",
            "2024-03-01T17:00:00.000Z",
            "Focus day",
        )
        .await?;

    assert_eq!(id, "booking-42");
    let body = state.last_booking.lock().unwrap().clone().context("booking body")?;
    assert_eq!(body["spaceId"], "s1");
    assert_eq!(body["subject"], "Focus day");
    assert_eq!(body["userEmail"], "");
    Ok(())
}

#[tokio::test]
async fn delete_booking_surfaces_remote_failures() -> Result<()> {
    let (url, _state) = spawn_mock().await?;
    let mut client = logged_in_client(&url).await?;

    client.delete_booking("b-1").await?;
    let err = client.delete_booking("missing").await.unwrap_err();
    match err {
        SeatsurfingError::Remote { status, body, .. } => {
            assert_eq!(status, 404);
            assert_eq!(body, "no such booking");
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}
