//! Error types.
//!
//! - [`NavigationError`] — why a navigation tree could not be loaded. It is
//!   never returned from [`NavigationDataSource::fetch`]; instead it is stored
//!   in [`NavigationState::error`] so callers always get a renderable state.
//! - [`TaskError`] — rejected task store operations (unknown id, invalid
//!   input).
//!
//! A matcher miss is not an error; [`match_path`] returns `None` for it.
//!
//! # Examples
//!
//! ```
//! use dashboard_navigator::error::NavigationError;
//!
//! let err = NavigationError::Status {
//!     endpoint: "/api/vertical-nav/data".into(),
//!     status: 500,
//! };
//! assert_eq!(
//!     err.to_string(),
//!     "Failed to fetch navigation data from /api/vertical-nav/data: 500"
//! );
//! ```
//!
//! [`NavigationDataSource::fetch`]: crate::source::NavigationDataSource::fetch
//! [`NavigationState::error`]: crate::source::NavigationState::error
//! [`match_path`]: crate::matching::match_path

use thiserror::Error;

/// Failure to load a navigation tree from its endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The endpoint answered with a non-2xx status
    #[error("Failed to fetch navigation data from {endpoint}: {status}")]
    Status { endpoint: String, status: u16 },

    /// The transport could not complete the request
    #[error("Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The body was not a JSON array of navigation items
    #[error("Invalid navigation data from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl NavigationError {
    /// Endpoint the failed request was sent to.
    pub fn endpoint(&self) -> &str {
        match self {
            NavigationError::Status { endpoint, .. }
            | NavigationError::Transport { endpoint, .. }
            | NavigationError::Decode { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status, if the endpoint answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            NavigationError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Rejected task store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// No task with this id exists
    #[error("Task not found: {id}")]
    NotFound { id: u32 },

    /// A field failed validation
    #[error("{message}")]
    Invalid { field: &'static str, message: String },
}

impl TaskError {
    /// HTTP status the mock backend answers with for this error.
    pub fn status(&self) -> u16 {
        match self {
            TaskError::NotFound { .. } => 404,
            TaskError::Invalid { .. } => 400,
        }
    }
}
