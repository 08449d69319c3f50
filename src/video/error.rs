use std::error::Error;
use std::fmt;

/// Errors raised by [`VideoStore`](super::VideoStore) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record carries the requested id.
    NotFound(u64),
    /// The collection lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "video not found: {}", id),
            StoreError::LockPoisoned(op) => write!(f, "video store lock poisoned: {}", op),
        }
    }
}

impl Error for StoreError {}

impl StoreError {
    /// Map this error to an HTTP-style status code.
    ///
    /// Missing records are reported as a bad request, matching the decode path.
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::NotFound(_) => 400,
            StoreError::LockPoisoned(_) => 500,
        }
    }
}
