//! Cutoff Quicksort
//!
//! In-place partition-exchange sort. Runs of up to
//! [`INSERTION_SORT_CUTOFF`] elements fall through to a stable
//! adjacent-swap insertion pass; longer runs are split around the middle
//! element with a Hoare-style partition.

mod error;
mod sort;
mod verify;

pub use error::SortError;
pub use sort::{insertion_sort, insertion_sort_by, quick_sort, quick_sort_by, INSERTION_SORT_CUTOFF};
pub use verify::{check_sorted, check_sorted_by};
