//! Testbed for an instrumented in-place partition sort.
//!
//! The core is a classic end-element-pivot quicksort that keeps explicit
//! comparison and move counters while it runs, so that algorithm behavior can
//! be characterized independently of its output. The counting rules are part
//! of the contract: two runs over the same input must report identical
//! totals, see [`quicksort::Counts`].
//!
//! [`verify::is_sorted`] is the independent oracle used to check the engine's
//! output, and [`patterns`] provides the deterministic inputs that feed the
//! driver, the tests and the benchmarks.

pub mod patterns;
pub mod quicksort;
pub mod verify;

pub use quicksort::{sort, sort_by, sort_range, Counts, RangeError};
pub use verify::is_sorted;
