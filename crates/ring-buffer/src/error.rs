//! Ring Buffer Error Types

use thiserror::Error;

/// Errors reported by ring buffer transfers and configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Write larger than the free space
    #[error("Insufficient space: requested {requested} slots, {available} available")]
    InsufficientSpace { requested: usize, available: usize },

    /// Read larger than the stored element count
    #[error("Insufficient data: requested {requested} elements, {stored} stored")]
    InsufficientData { requested: usize, stored: usize },

    /// Source or destination region does not cover the requested run
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or is out of range
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BufferError {
    /// True for errors caused by the buffer being too full or too empty
    pub fn is_capacity_violation(&self) -> bool {
        matches!(
            self,
            BufferError::InsufficientSpace { .. } | BufferError::InsufficientData { .. }
        )
    }
}

impl From<config::ConfigError> for BufferError {
    fn from(err: config::ConfigError) -> Self {
        BufferError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_violation_classification() {
        assert!(BufferError::InsufficientSpace { requested: 2, available: 1 }.is_capacity_violation());
        assert!(BufferError::InsufficientData { requested: 1, stored: 0 }.is_capacity_violation());
        assert!(!BufferError::InvalidArgument("dst".into()).is_capacity_violation());
    }

    #[test]
    fn test_display_messages() {
        let err = BufferError::InsufficientSpace { requested: 5, available: 1 };
        assert_eq!(err.to_string(), "Insufficient space: requested 5 slots, 1 available");
    }
}
