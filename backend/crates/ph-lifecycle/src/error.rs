use crate::RpcOperation;

use ph_db::DbError;
use ph_rpc::RpcError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub const CONTENT_UNAVAILABLE_MESSAGE: &str = "File is deleted, can't be hosted";
pub const CATALOG_UNAVAILABLE_MESSAGE: &str = "Failed to look up hosting details";
pub const RPC_TRANSPORT_MESSAGE: &str = "Failed to send RPC message to c2 profile";

#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("Malformed request: {message} {location}")]
    MalformedRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile {profile_id} not found {location}")]
    ProfileNotFound {
        profile_id: i64,
        location: ErrorLocation,
    },

    #[error("File {file_uuid} not found {location}")]
    ContentNotFound {
        file_uuid: String,
        location: ErrorLocation,
    },

    #[error("File {file_uuid} is deleted {location}")]
    ContentUnavailable {
        file_uuid: String,
        location: ErrorLocation,
    },

    #[error("Catalog lookup failed: {source} {location}")]
    CatalogUnavailable {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("RPC {operation} transport failure: {source} {location}")]
    RpcTransport {
        operation: RpcOperation,
        #[source]
        source: RpcError,
        location: ErrorLocation,
    },

    #[error("RPC {operation} refused: {message} {location}")]
    RpcLogicalFailure {
        operation: RpcOperation,
        message: String,
        location: ErrorLocation,
    },
}

impl LifecycleError {
    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(field: &str) -> Self {
        Self::malformed(format!("{field} is required"))
    }

    #[track_caller]
    pub fn profile_not_found(profile_id: i64) -> Self {
        Self::ProfileNotFound {
            profile_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn content_not_found(file_uuid: impl Into<String>) -> Self {
        Self::ContentNotFound {
            file_uuid: file_uuid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn content_unavailable(file_uuid: impl Into<String>) -> Self {
        Self::ContentUnavailable {
            file_uuid: file_uuid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rpc_transport(operation: RpcOperation, source: RpcError) -> Self {
        Self::RpcTransport {
            operation,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rpc_logical(operation: RpcOperation, message: impl Into<String>) -> Self {
        Self::RpcLogicalFailure {
            operation,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code, stable across releases.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => "MALFORMED_REQUEST",
            Self::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            Self::ContentNotFound { .. } => "CONTENT_NOT_FOUND",
            Self::ContentUnavailable { .. } => "CONTENT_UNAVAILABLE",
            Self::CatalogUnavailable { .. } => "CATALOG_UNAVAILABLE",
            Self::RpcTransport { .. } => "RPC_TRANSPORT",
            Self::RpcLogicalFailure { .. } => "RPC_LOGICAL_FAILURE",
        }
    }

    /// Text returned to the caller. Never carries SQL errors, URLs or
    /// source locations.
    pub fn client_message(&self) -> String {
        match self {
            Self::MalformedRequest { message, .. } => message.clone(),
            Self::ProfileNotFound { profile_id, .. } => {
                format!("Failed to find c2 profile {profile_id}")
            }
            Self::ContentNotFound { file_uuid, .. } => format!("Failed to find file {file_uuid}"),
            Self::ContentUnavailable { .. } => CONTENT_UNAVAILABLE_MESSAGE.to_string(),
            Self::CatalogUnavailable { .. } => CATALOG_UNAVAILABLE_MESSAGE.to_string(),
            Self::RpcTransport { .. } => RPC_TRANSPORT_MESSAGE.to_string(),
            Self::RpcLogicalFailure { message, .. } => message.clone(),
        }
    }

    /// The RPC this error came from, if any.
    pub fn operation(&self) -> Option<RpcOperation> {
        match self {
            Self::RpcTransport { operation, .. } | Self::RpcLogicalFailure { operation, .. } => {
                Some(*operation)
            }
            _ => None,
        }
    }

    /// Failure kind label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RpcTransport { source, .. } => source.kind(),
            Self::RpcLogicalFailure { .. } => "logical",
            _ => "validation",
        }
    }
}

impl From<DbError> for LifecycleError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::CatalogUnavailable {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LifecycleError>;
