//! Pointer Scans
//! =========================================
//!
//! Problem
//! -------
//! Five array searches that share one shape: keep one or two cursors over the
//! input and move them by a monotonic rule that never revisits eliminated
//! solution space.
//!   1) pair sum over an unsorted sequence (single pass + lookup table)
//!   2) pair sum over a sorted sequence (converging pointers)
//!   3) container with most water (converging pointers)
//!   4) all unique zero-sum triplets (sort + anchor + converging pointers)
//!   5) alphanumeric, case-insensitive palindrome (converging pointers)
//!
//! Approach
//! --------
//! 1) Unsorted pair sum: for each value compute `target - value` and look it
//!    up *before* recording the value. Recording first would miss
//!    `target == 2 * value` pairs. Only the earliest index per value is kept.
//! 2) Sorted pair sum: sum below target advances `left`, above retreats
//!    `right`, equal returns.
//! 3) Container: measure, then move the pointer at the shorter bar (on a tie
//!    `right` moves). The taller bar can never bound a larger area at a
//!    smaller width.
//! 4) Triplets: sort, then fix each distinct non-positive anchor and run the
//!    pair scan for `-anchor` to its right, stepping over runs of equal
//!    values after every hit.
//! 5) Palindrome: skip non-alphanumerics from both ends and compare lowercased
//!    characters; no filtered copy.
//!
//! Correctness notes
//! -----------------
//! - Nothing panics on empty or singleton input; each search falls through to
//!   its neutral result (`None`, `0`, empty list, `true`).
//! - Elements are `i32`; sums and areas are computed in `i64`.
//! - No search mutates a borrowed input. [`zero_sum_triplets_in_place`] is
//!   the one entry point that sorts a caller-owned buffer, and it takes
//!   `&mut`.
//! - [`pair_sum_sorted`] trusts its ascending precondition (debug-asserted
//!   only); [`pair_sum_sorted_checked`] verifies it and reports
//!   [`ScanError::Unsorted`].
//!
//! Performance notes
//! -----------------
//! - Pair sums and container: O(n). Triplets: O(n log n + n^2).
//!   Palindrome: O(n). All but the unsorted pair sum use O(1) extra space.
//! - Every search has a `*_probed` form taking a [`Probe`]. Pass a
//!   [`StepCounter`] to count iterations; the plain forms pass `()`.
//! - Build with release settings (opt-level=3, lto=thin, codegen-units=1,
//!   panic=abort), see `Cargo.toml`.

pub mod container;
pub mod error;
pub mod pair_sum;
pub mod palindrome;
pub mod probe;
pub mod triplet;

pub use container::{
    Container, max_container, max_container_area, max_container_area_brute_force,
    max_container_probed,
};
pub use error::{Result, ScanError};
pub use pair_sum::{
    pair_sum_all_pairs, pair_sum_brute_force, pair_sum_sorted, pair_sum_sorted_checked,
    pair_sum_sorted_probed, pair_sum_unsorted, pair_sum_unsorted_probed,
};
pub use palindrome::{
    is_palindrome, is_palindrome_ascii, is_palindrome_ascii_probed, is_palindrome_buffered,
    is_palindrome_probed,
};
pub use probe::{Probe, StepCounter};
pub use triplet::{
    Triplet, zero_sum_triplet_indices, zero_sum_triplets, zero_sum_triplets_brute_force,
    zero_sum_triplets_in_place, zero_sum_triplets_probed,
};

/// Positions `(i, j)` into the caller's sequence, `i < j`.
pub type IndexPair = (usize, usize);
