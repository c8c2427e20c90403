//! Quicksort with insertion-sort cutoff

use std::cmp::Ordering;
use std::mem;

/// Runs at or below this length are sorted by insertion
pub const INSERTION_SORT_CUTOFF: usize = 30;

/// Sort `v` in ascending order
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

/// Sort `v` in place using `compare`
///
/// Not stable above the cutoff. O(n log n) on average, O(n²) in the worst case;
/// never allocates.
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(v, &mut compare);
}

/// Stable insertion sort in ascending order
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, T::cmp);
}

/// Stable insertion sort using `compare`
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_pass(v, &mut compare);
}

fn insertion_pass<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        // Strictly greater only, so equal elements keep their order
        while j > 0 && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Recurses into the shorter partition and loops on the longer one, so
/// stack depth stays O(log n) even when every pivot is an extreme.
fn sort_recursive<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        if v.len() <= INSERTION_SORT_CUTOFF {
            insertion_pass(v, compare);
            return;
        }

        let (left_end, right_start) = partition(v, compare);
        let (left, rest) = mem::take(&mut v).split_at_mut(left_end);
        let right = &mut rest[right_start - left_end..];

        if left.len() < right.len() {
            sort_recursive(left, compare);
            v = right;
        } else {
            sort_recursive(right, compare);
            v = left;
        }
    }
}

/// Hoare-style partition around the middle element.
///
/// Returns `(left_end, right_start)`: every element of `v[..left_end]` is
/// `<=` the pivot and every element of `v[right_start..]` is `>=` it. Both
/// halves are strictly shorter than `v`.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // The pivot stays in the slice, so track its index across swaps
    let mut pivot = (v.len() - 1) / 2;
    let mut left = 0;
    // Exclusive: the right scan looks at `v[right - 1]`
    let mut right = v.len();

    while left < right {
        while compare(&v[pivot], &v[right - 1]) == Ordering::Less {
            right -= 1;
        }
        while compare(&v[left], &v[pivot]) == Ordering::Less {
            left += 1;
        }

        if left < right {
            let last = right - 1;
            v.swap(left, last);
            if pivot == left {
                pivot = last;
            } else if pivot == last {
                pivot = left;
            }
            left += 1;
            right -= 1;
        }
    }

    (right, left)
}
