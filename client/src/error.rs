//! Error types for remote map service calls.

use std::fmt;

use model::ModelError;

/// Result type for remote map service calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the map service.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Connection, DNS or I/O failure before a response arrived.
    Transport {
        /// Transport failure description.
        reason: String,
    },

    /// The service answered with a non-success status.
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
    },

    /// Response or request body could not be handled as JSON.
    Json {
        /// Serializer failure description.
        reason: String,
    },

    /// The fetched record could not be turned into a map model.
    Model(ModelError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { reason } => write!(f, "transport failure: {reason}"),
            Self::UnexpectedStatus { status } => {
                write!(f, "map service answered with status {status}")
            }
            Self::Json { reason } => write!(f, "body is not usable JSON: {reason}"),
            Self::Model(err) => write!(f, "fetched map is invalid: {err}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for ClientError {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            reason: err.to_string(),
        }
    }
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => Self::UnexpectedStatus { status },
            ureq::Error::Transport(transport) => Self::Transport {
                reason: transport.to_string(),
            },
        }
    }
}
