//! Error Taxonomy
//!
//! Error identity is the backend's human-readable message; nothing retries.
//! `Auth` failures send the user back to the landing page, `Fetch` failures
//! render an inline listing error, `Write` failures surface in a dialog.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Session or credential failure.
    #[error("{0}")]
    Auth(String),
    /// Listing or profile read failure.
    #[error("{0}")]
    Fetch(String),
    /// Insert, update, delete, or upload failure.
    #[error("{0}")]
    Write(String),
}

impl GatewayError {
    pub fn message(&self) -> &str {
        match self {
            Self::Auth(m) | Self::Fetch(m) | Self::Write(m) => m,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
