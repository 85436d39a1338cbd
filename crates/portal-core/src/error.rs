//! Portal Errors

use thiserror::Error;

/// Common result type for portal operations
pub type PortalResult<T> = Result<T, PortalError>;

/// Errors surfaced by the portal core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// A due-date attribute that is missing or cannot be parsed
    #[error("invalid due date: {raw:?}")]
    InvalidDueDate { raw: String },

    /// Navigation target that matches no known section
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// DOM mutation failed while rendering
    #[error("render error: {0}")]
    Render(String),

    /// Browser storage unavailable or rejected a write
    #[error("storage error: {0}")]
    Storage(String),
}
