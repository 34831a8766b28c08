//! Sortedness check.
//!
//! Deliberately shares no code with the sort itself so it can serve as an
//! independent oracle for its output.

/// Returns `true` if `v` is non-decreasing. Trivially true for length 0 and 1.
pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: Ord,
{
    v.windows(2).all(|w| w[0] <= w[1])
}
