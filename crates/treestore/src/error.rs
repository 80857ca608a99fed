//! Error types for store operations.

use std::fmt;

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record is associated with the requested id.
    #[error("unable to find id: {0}")]
    NotFound(String),

    /// The id allocator returned a record that still has no id.
    #[error("id allocator returned a record without an id")]
    IdNotAllocated,
}

impl StoreError {
    /// Build a [`StoreError::NotFound`] for the given id.
    pub fn not_found<K: fmt::Display>(id: &K) -> Self {
        StoreError::NotFound(id.to_string())
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
