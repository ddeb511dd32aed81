//! Storefront Error Types
//!
//! Cart mutations and catalog queries never fail; these types describe the
//! edges where data enters the crate (storage slots, catalog documents,
//! sort keys coming from the UI).

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Failure reported by a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem failure.
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Backend refused the operation (quota exceeded, disabled, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure while restoring or saving the persisted cart blob.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read cart blob: {0}")]
    Read(#[source] StorageError),

    #[error("cart blob is not valid json: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("cart blob version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("cart blob failed validation: {0}")]
    Invalid(String),

    #[error("failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write cart blob: {0}")]
    Write(#[source] StorageError),
}

/// Failure while loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },
}

/// Failure while interpreting query input from the UI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

/// Umbrella error for callers that do not care which edge failed.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
}
