//! Token lifecycle for one Seatsurfing account.
//!
//! The server issues access tokens valid for 15 minutes. We record expiry one minute early and
//! refresh proactively once the clock is within [`REFRESH_MARGIN_SECS`] of that recorded expiry.

use chrono::{DateTime, Duration, Utc};

use crate::models::TokenPair;

/// Recorded lifetime of a freshly issued access token, in seconds.
pub const TOKEN_LIFETIME_SECS: i64 = 14 * 60;

/// Refresh once `now` is past `expires_at - REFRESH_MARGIN_SECS`.
pub const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unconfigured,
    Authenticated,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn state(&self) -> SessionState {
        if self.access_token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unconfigured
        }
    }

    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at - Duration::seconds(REFRESH_MARGIN_SECS)
    }

    pub(crate) fn store(&mut self, tokens: TokenPair, now: DateTime<Utc>) {
        self.access_token = Some(tokens.access_token);
        self.refresh_token = Some(tokens.refresh_token);
        self.expires_at = now + Duration::seconds(TOKEN_LIFETIME_SECS);
    }

    pub(crate) fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> TokenPair {
        TokenPair {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        }
    }

    #[test]
    fn store_sets_expiry_fourteen_minutes_ahead() {
        let now = Utc::now();
        let mut session = Session::default();
        session.store(tokens(), now);

        assert_eq!(session.expires_at(), now + Duration::minutes(14));
        assert_eq!(session.state(), SessionState::Authenticated);
        assert!(!session.needs_refresh(now));
    }

    #[test]
    fn refresh_window_opens_sixty_seconds_before_expiry() {
        let now = Utc::now();
        let mut session = Session::default();
        session.store(tokens(), now);
        let expires_at = session.expires_at();

        assert!(!session.needs_refresh(expires_at - Duration::seconds(61)));
        assert!(!session.needs_refresh(expires_at - Duration::seconds(60)));
        assert!(session.needs_refresh(expires_at - Duration::seconds(59)));
        assert!(session.needs_refresh(expires_at + Duration::seconds(1)));
    }

    #[test]
    fn clear_drops_both_tokens() {
        let mut session = Session::default();
        session.store(tokens(), Utc::now());
        session.clear();

        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert_eq!(session.state(), SessionState::Unconfigured);
    }
}
