//! Error types for the Malachite store.

use crate::NodeId;
use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in store operations.
///
/// Every failing write leaves the store exactly as it was before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// A write referenced a parent that does not exist.
    #[error("parent node {0} not found, cannot crystallize noise")]
    ParentNotFound(NodeId),

    /// An insertion collided with an existing identifier.
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// A sector name did not match any sector.
    #[error("unknown sector: {0}")]
    UnknownSector(String),

    /// Content was empty or whitespace only.
    #[error("content must not be empty")]
    EmptyContent,

    /// Mutation degree was not a finite number in [0, 1].
    #[error("mutation degree must be within [0, 1], got {0}")]
    InvalidMutation(f64),

    /// A spectrum override or blend target left [0, 1], or a blend weight
    /// was not a finite number in [0, 1].
    #[error("spectrum components and blend weight must be within [0, 1]")]
    InvalidSpectrum,

    /// A snapshot violates a graph invariant.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl From<malachite_topology::ParseSectorError> for Error {
    fn from(e: malachite_topology::ParseSectorError) -> Self {
        Error::UnknownSector(e.0)
    }
}
