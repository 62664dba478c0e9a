use std::sync::Mutex;

/// Cross-test synchronization for process-wide state (env vars).
///
/// Credential resolution reads `SEATSURFING_*` env vars, which are shared per-process. Any test
/// that mutates or depends on them should lock this mutex.
pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clears the credential env vars for the duration of a test.
pub(crate) struct CleanCredentialEnv {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl CleanCredentialEnv {
    pub(crate) fn acquire() -> Self {
        let guard = ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for key in CREDENTIAL_KEYS {
            std::env::remove_var(key);
        }
        Self { _guard: guard }
    }
}

const CREDENTIAL_KEYS: [&str; 5] = [
    seatsurfing_client::config::HOME_ENV,
    seatsurfing_client::config::URL_ENV,
    seatsurfing_client::config::EMAIL_ENV,
    seatsurfing_client::config::PASSWORD_ENV,
    seatsurfing_client::config::ORG_ID_ENV,
];
