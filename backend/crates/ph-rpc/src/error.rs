use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Transport-level failures talking to a profile server.
///
/// A reply that decodes but reports `success: false` is not an error here;
/// it comes back as an `RpcOutcome`.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Profile server returned status {status} {location}")]
    Status {
        status: u16,
        location: ErrorLocation,
    },

    #[error("Failed to decode profile server reply: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl RpcError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        RpcError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn decode(err: reqwest::Error) -> Self {
        RpcError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(status: u16) -> Self {
        RpcError::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Location-free description suitable for operator notifications.
    pub fn summary(&self) -> String {
        match self {
            RpcError::Http { message, .. } => message.clone(),
            RpcError::Status { status, .. } => format!("profile server returned status {status}"),
            RpcError::Decode { message, .. } => format!("undecodable reply: {message}"),
        }
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RpcError::Http { source, .. } if source.is_timeout() => "timeout",
            RpcError::Http { .. } => "http",
            RpcError::Status { .. } => "status",
            RpcError::Decode { .. } => "decode",
        }
    }
}

impl From<reqwest::Error> for RpcError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RpcError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, RpcError>;
