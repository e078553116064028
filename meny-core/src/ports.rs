//! Traits describing provider capabilities and the shared error type.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{School, SupplierMeta};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to supplier backends.
pub enum PortError {
    /// The transport failed: connection error, timeout, or non-success status.
    #[error("Provider unavailable at {path}: {source}")]
    ProviderUnavailable {
        /// Resource path that was requested.
        path: String,
        /// Underlying HTTP client error.
        #[source]
        source: ReqwestError,
    },
    /// A response body did not have the expected listing shape.
    #[error("Unexpected schema at {path}: {message}")]
    UnexpectedSchema {
        /// Resource path whose body failed to decode.
        path: String,
        /// Decoder message.
        message: String,
    },
    /// The supplier has no registered plugin.
    #[error("Unsupported supplier")]
    UnsupportedSupplier,
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for supplier-specific school catalog backends.
pub trait SchoolPort: Send + Sync {
    /// Metadata describing the supplier handled by this port.
    fn supplier(&self) -> &SupplierMeta;

    /// List every school in the supplier's catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when any provider request fails or returns an
    /// unexpected body. No partial list is ever returned.
    async fn list_schools(&self) -> Result<Vec<School>, PortError>;
}
