//! Authenticated REST client for a single Seatsurfing account.

use chrono::{DateTime, Utc};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::error::{Result, SeatsurfingError};
use crate::models::{
    Booking, Location, LoginRequest, NewBooking, RefreshRequest, Space, SpaceAvailability,
    TokenPair, User,
};
use crate::session::{Session, SessionState};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the id of a newly created object.
const OBJECT_ID_HEADER: &str = "X-Object-ID";

#[derive(Debug, Clone)]
pub struct SeatsurfingClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl SeatsurfingClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            session: Session::default(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.state() == SessionState::Authenticated
    }

    pub async fn login(&mut self, email: &str, password: &str, organization_id: &str) -> Result<()> {
        let body = LoginRequest {
            email,
            password,
            organization_id,
        };
        let response = self
            .send(Method::POST, "/auth/login", Some(&body), false)
            .await?;
        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(SeatsurfingError::Authentication(format!(
                "Login failed with status {status}: {text}"
            )));
        }

        let tokens: TokenPair = response.json().await?;
        self.session.store(tokens, Utc::now());
        log::info!("Logged in to {} as {email}", self.base_url);
        Ok(())
    }

    pub async fn ensure_authenticated(&mut self) -> Result<()> {
        self.ensure_authenticated_at(Utc::now()).await
    }

    /// [`Self::ensure_authenticated`] against an explicit clock reading.
    pub async fn ensure_authenticated_at(&mut self, now: DateTime<Utc>) -> Result<()> {
        if self.session.access_token().is_none() {
            return Err(SeatsurfingError::Authentication(
                "Not authenticated - please login first".to_string(),
            ));
        }
        if self.session.needs_refresh(now) {
            self.refresh().await?;
        }
        Ok(())
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let Some(refresh_token) = self.session.refresh_token().map(str::to_string) else {
            return Err(SeatsurfingError::Authentication(
                "No refresh token available".to_string(),
            ));
        };

        log::debug!("Refreshing access token");
        let body = RefreshRequest {
            refresh_token: &refresh_token,
        };
        let response = self
            .send(Method::POST, "/auth/refresh", Some(&body), false)
            .await;
        let response = match response {
            Ok(response) if response.status() == StatusCode::OK => response,
            Ok(response) => {
                log::warn!("Token refresh rejected with status {}", response.status());
                self.session.clear();
                return Err(refresh_failed());
            }
            Err(err) => {
                log::warn!("Token refresh failed: {err}");
                self.session.clear();
                return Err(refresh_failed());
            }
        };

        match response.json::<TokenPair>().await {
            Ok(tokens) => {
                self.session.store(tokens, Utc::now());
                log::info!("Access token refreshed");
                Ok(())
            }
            Err(err) => {
                log::warn!("Token refresh returned an unreadable body: {err}");
                self.session.clear();
                Err(refresh_failed())
            }
        }
    }

    pub async fn get_me(&mut self) -> Result<User> {
        self.get_json("/user/me").await
    }

    pub async fn get_locations(&mut self) -> Result<Vec<Location>> {
        self.get_json("/location/").await
    }

    pub async fn get_spaces(&mut self, location_id: &str) -> Result<Vec<Space>> {
        let endpoint = format!("/location/{}/space/", urlencoding::encode(location_id));
        self.get_json(&endpoint).await
    }

    pub async fn get_space_availability(
        &mut self,
        location_id: &str,
        enter: &str,
        leave: &str,
    ) -> Result<Vec<SpaceAvailability>> {
        let endpoint = format!(
            "/location/{}/space/availability?enter={}&leave={}",
            urlencoding::encode(location_id),
            urlencoding::encode(enter),
            urlencoding::encode(leave),
        );
        self.get_json(&endpoint).await
    }

    pub async fn get_my_bookings(&mut self) -> Result<Vec<Booking>> {
        self.get_json("/booking/").await
    }

    /// Returns the new booking id, or `"created"` when the server omits it.
    pub async fn create_booking(
        &mut self,
        space_id: &str,
        enter: &str,
        leave: &str,
        subject: &str,
    ) -> Result<String> {
        self.ensure_authenticated().await?;
        let body = NewBooking {
            space_id: space_id.to_string(),
            enter: enter.to_string(),
            leave: leave.to_string(),
            subject: subject.to_string(),
            user_email: String::new(),
        };
        let response = self
            .send(Method::POST, "/booking/", Some(&body), true)
            .await?;
        if response.status() != StatusCode::CREATED {
            return Err(remote_error(Method::POST, "/booking/", response).await);
        }

        let booking_id = response
            .headers()
            .get(OBJECT_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("created")
            .to_string();
        log::info!("Created booking {booking_id} for space {space_id}");
        Ok(booking_id)
    }

    pub async fn delete_booking(&mut self, booking_id: &str) -> Result<()> {
        self.ensure_authenticated().await?;
        let endpoint = format!("/booking/{}", urlencoding::encode(booking_id));
        let response = self
            .send::<()>(Method::DELETE, &endpoint, None, true)
            .await?;
        if !response.status().is_success() {
            return Err(remote_error(Method::DELETE, &endpoint, response).await);
        }
        log::info!("Deleted booking {booking_id}");
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&mut self, endpoint: &str) -> Result<T> {
        self.ensure_authenticated().await?;
        let response = self
            .send::<()>(Method::GET, endpoint, None, true)
            .await?;
        if !response.status().is_success() {
            return Err(remote_error(Method::GET, endpoint, response).await);
        }
        Ok(response.json().await?)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("{method} {url}");

        let mut request = self.http.request(method, &url);
        if authenticated {
            if let Some(token) = self.session.access_token() {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }
}

fn refresh_failed() -> SeatsurfingError {
    SeatsurfingError::Authentication("Token refresh failed - please login again".to_string())
}

async fn remote_error(method: Method, endpoint: &str, response: Response) -> SeatsurfingError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    SeatsurfingError::Remote {
        method: method.to_string(),
        endpoint: endpoint.to_string(),
        status,
        body,
    }
}
