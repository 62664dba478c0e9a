//! Credential resolution: tool arguments, then environment, then `config.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const HOME_ENV: &str = "SEATSURFING_HOME";
pub const URL_ENV: &str = "SEATSURFING_URL";
pub const EMAIL_ENV: &str = "SEATSURFING_EMAIL";
pub const PASSWORD_ENV: &str = "SEATSURFING_PASSWORD";
pub const ORG_ID_ENV: &str = "SEATSURFING_ORG_ID";

const DATA_DIR_NAME: &str = ".seatsurfing";
const CONFIG_FILE_NAME: &str = "config.json";
const SPACES_CACHE_FILE_NAME: &str = "spaces.json";

/// Per-user directory holding `config.json` and `spaces.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$SEATSURFING_HOME` if set, else `~/.seatsurfing`.
    pub fn from_env() -> Self {
        if let Some(root) = non_empty_env(HOME_ENV) {
            return Self::new(root);
        }
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(DATA_DIR_NAME))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn spaces_cache_path(&self) -> PathBuf {
        self.root.join(SPACES_CACHE_FILE_NAME)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            url: non_empty_env(URL_ENV),
            email: non_empty_env(EMAIL_ENV),
            password: non_empty_env(PASSWORD_ENV),
            organization_id: non_empty_env(ORG_ID_ENV),
        }
    }

    /// Fill every unset (or blank) field from `fallback`.
    pub fn or(self, fallback: Credentials) -> Self {
        Self {
            url: pick(self.url, fallback.url),
            email: pick(self.email, fallback.email),
            password: pick(self.password, fallback.password),
            organization_id: pick(self.organization_id, fallback.organization_id),
        }
    }

    /// Environment overrides on top of the config file.
    pub fn resolve(data_dir: &DataDir) -> Self {
        Self::from_env().or(load_file_config(&data_dir.config_path()))
    }

    pub fn is_complete(&self) -> bool {
        [&self.url, &self.email, &self.password, &self.organization_id]
            .iter()
            .all(|value| value.is_some())
    }
}

fn pick(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    non_blank(primary).or_else(|| non_blank(fallback))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_env(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

/// Missing or malformed files read as empty credentials.
pub fn load_file_config(path: &Path) -> Credentials {
    match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed config {}: {err}", path.display());
            Credentials::default()
        }),
        Err(_) => Credentials::default(),
    }
}

pub fn save_file_config(path: &Path, credentials: &Credentials) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(credentials)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
