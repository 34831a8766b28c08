//! In-place partition sort with explicit operation accounting.
//!
//! Classic Hoare-style scheme with the last element of the range as pivot and
//! two converging scans. Not meant as a fast general-purpose sort, the point
//! is that for a given input the exact comparison and move totals are
//! reproducible. The scan conditions are strict `<` / `>`, so pivot-equal
//! elements stop a scan instead of being skipped, which is observable in the
//! reported totals.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// Operation totals accumulated over one top-level sort call.
///
/// A comparison is charged once per scan step, including the terminating step
/// that ends a scan. A move is one two-element exchange, either a scan-phase
/// exchange or the final pivot placement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub comparisons: u64,
    pub moves: u64,
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} comparisons and {} moves", self.comparisons, self.moves)
    }
}

/// Rejected sort range, reported before any element is read or written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("sort range start {low} is past its end {high}")]
    Inverted { low: usize, high: usize },
    #[error("sort range end {high} is out of bounds for length {len}")]
    OutOfBounds { high: usize, len: usize },
}

/// Sorts the whole slice and returns the operation totals.
#[inline]
pub fn sort<T>(v: &mut [T]) -> Counts
where
    T: Ord,
{
    let mut counts = Counts::default();
    quicksort(v, &mut |a, b| a.lt(b), &mut counts);
    counts
}

/// Sorts the whole slice with a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> Counts
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut counts = Counts::default();
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less, &mut counts);
    counts
}

/// Sorts the inclusive sub-range `[low, high]` of `v`, leaving every element
/// outside of it untouched.
///
/// The bounds are validated up front, on error `v` stays unmodified.
/// `low == high` is a single-element range and a no-op.
pub fn sort_range<T>(v: &mut [T], low: usize, high: usize) -> Result<Counts, RangeError>
where
    T: Ord,
{
    if low > high {
        return Err(RangeError::Inverted { low, high });
    }
    if high >= v.len() {
        return Err(RangeError::OutOfBounds { high, len: v.len() });
    }

    let mut counts = Counts::default();
    quicksort(&mut v[low..=high], &mut |a, b| a.lt(b), &mut counts);
    Ok(counts)
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F, counts: &mut Counts)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        // The last slot serves as pivot. The scans never touch that slot, so
        // it keeps holding the pivot value until the placement swap below.
        let pivot = len - 1;

        let mut i = 0;
        let mut j = pivot;

        loop {
            // Scan from the left for an element >= pivot. The pivot slot
            // itself ends the scan at the latest, `i` cannot leave the range.
            loop {
                counts.comparisons += 1;
                if is_less(&v[i], &v[pivot]) {
                    i += 1;
                } else {
                    break;
                }
            }

            // Scan from the right for an element <= pivot. Only this scan
            // carries a lower bound check, and the terminating step is
            // charged even when that check ends the scan without an element
            // comparison.
            loop {
                counts.comparisons += 1;
                if j > 0 {
                    j -= 1;
                    if is_less(&v[pivot], &v[j]) {
                        continue;
                    }
                }
                break;
            }

            // The scans met or crossed, the range is partitioned.
            if j <= i {
                break;
            }

            v.swap(i, j);
            counts.moves += 1;
            // Resume the left scan one past the exchanged slot.
            i += 1;
        }

        // Move the pivot into its final position. Charged as a move even when
        // `i` already is the pivot slot.
        v.swap(i, pivot);
        counts.moves += 1;

        // Recurse into the left side.
        quicksort(&mut v[..i], is_less, counts);

        // Continue with the right side.
        v = &mut v[(i + 1)..];
    }
}
