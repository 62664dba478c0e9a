use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeatsurfingError>;

#[derive(Error, Debug)]
pub enum SeatsurfingError {
    #[error("{0}")]
    Authentication(String),

    #[error("missing required argument '{0}'")]
    InvalidArgument(String),

    #[error("{field} is required: pass it as an argument, set {env}, or run `seatsurfing setup`")]
    MissingCredential {
        field: &'static str,
        env: &'static str,
    },

    #[error("Could not parse datetime: {0}")]
    DateParse(String),

    #[error("{method} {endpoint} failed with status {status}: {body}")]
    Remote {
        method: String,
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SeatsurfingError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}
