//! Error types shared by the catalog core and the HTTP client.

use thiserror::Error;

/// The backend sent JSON that does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected response shape: {0}")]
pub struct DecodeError(pub String);

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self(e.to_string())
    }
}

/// Failure of a single request against the activities backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx response. `detail` is the server's explanation, when it sent one.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// 2xx response whose body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ClientError {
    /// Text shown in the status region: the server detail verbatim, or `fallback`
    /// when there is none or it is empty.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Rejected {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
