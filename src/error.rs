use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

/// Error type for Hub API operations.
///
/// - `Config` — the client configuration was rejected
/// - `RequestBuild` — the request could not be built (bad URL, bad header value)
/// - `Serialize` — the request payload could not be encoded as JSON
/// - `RequestFailed` — network/transport errors (wraps `reqwest::Error`)
/// - `Status` — any status other than 200, with the raw response body bytes
/// - `Decode` — the response body did not match the expected shape
/// - `Operation` — one of the above, wrapped with the facade operation that failed
#[derive(Debug, Error)]
pub enum HubApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build request: {0}")]
    RequestBuild(#[source] reqwest::Error),

    #[error("failed to serialize body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("request failed (status: {status}, body: {})", String::from_utf8_lossy(.body))]
    Status { status: StatusCode, body: Vec<u8> },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to {action}: {source}")]
    Operation {
        action: &'static str,
        #[source]
        source: Box<HubApiError>,
    },
}

impl HubApiError {
    /// HTTP status of the failed response, looking through operation context.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HubApiError::Status { status, .. } => Some(*status),
            HubApiError::Operation { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Body of the failed response as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> Option<std::borrow::Cow<'_, str>> {
        match self {
            HubApiError::Status { body, .. } => Some(String::from_utf8_lossy(body)),
            HubApiError::Operation { source, .. } => source.body_text(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HubApiError>;

/// Attaches the name of a facade operation to an error without dropping it.
pub(crate) trait OperationContext<T> {
    fn context(self, action: &'static str) -> Result<T>;
}

impl<T> OperationContext<T> for Result<T> {
    fn context(self, action: &'static str) -> Result<T> {
        self.map_err(|e| HubApiError::Operation {
            action,
            source: Box::new(e),
        })
    }
}
