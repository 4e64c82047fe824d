use std::time::Duration;

use thiserror::Error;

use crate::session::{Action, Screen};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid candidate roster: {0}")]
    InvalidRoster(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures reported by the host location service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("location is not supported on this device")]
    Unsupported,

    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    Unavailable(String),

    #[error("location request timed out after {0:?}")]
    Timeout(Duration),
}

/// Rejections raised by session operations. Each one is also written to the
/// session notice before being returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("name and age are required")]
    MissingNameOrAge,

    #[error("location has not been granted")]
    LocationNotGranted,

    #[error("cannot {action:?} from {from:?}")]
    InvalidTransition { from: Screen, action: Action },

    #[error("candidate {0} is not among the current matches")]
    UnknownCandidate(u32),
}

pub type SessionResult<T> = Result<T, SessionError>;
