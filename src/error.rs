//! Error types for cache operations.
//!
//! Every failure the cache can report is synchronous and local: either the
//! cache was constructed with an invalid capacity, or a lookup named a key
//! that is not currently tracked. Neither is retried internally, and a failed
//! lookup leaves the cache unchanged.

use core::fmt;

#[cfg(feature = "std")]
extern crate std;

/// Result type alias for cache operations.
pub type CacheResult<T> = core::result::Result<T, CacheError>;

/// Error type for cache construction and lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// A cache configuration was built from a negative capacity.
    NegativeCapacity(i64),

    /// `get` or `remove` was invoked with a key the cache does not track.
    KeyNotFound,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::NegativeCapacity(capacity) => {
                write!(f, "Capacity should not be negative: {capacity}")
            }
            CacheError::KeyNotFound => write!(f, "No such element in cache"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CacheError::KeyNotFound.to_string(),
            "No such element in cache"
        );
        assert_eq!(
            CacheError::NegativeCapacity(-2).to_string(),
            "Capacity should not be negative: -2"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(CacheError::KeyNotFound, CacheError::KeyNotFound);
        assert_ne!(
            CacheError::KeyNotFound,
            CacheError::NegativeCapacity(-1)
        );
    }
}
