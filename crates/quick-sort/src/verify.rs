//! Sort output verification

use crate::SortError;
use std::cmp::Ordering;

/// Check that `v` is non-decreasing, reporting the first inversion
pub fn check_sorted<T: Ord>(v: &[T]) -> Result<(), SortError> {
    check_sorted_by(v, T::cmp)
}

/// Check that `v` is non-decreasing under `compare`
pub fn check_sorted_by<T, F>(v: &[T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    match v
        .windows(2)
        .position(|pair| compare(&pair[0], &pair[1]) == Ordering::Greater)
    {
        Some(index) => Err(SortError::OutOfOrder { index }),
        None => Ok(()),
    }
}
