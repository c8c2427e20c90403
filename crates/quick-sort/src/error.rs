//! Sort Verification Error Types

use thiserror::Error;

/// Errors reported when checking sort output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// Element at `index` is greater than the one after it
    #[error("Out of order at index {index}")]
    OutOfOrder { index: usize },
}
