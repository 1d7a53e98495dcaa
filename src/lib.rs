//! Myers diff for collections.
//!
//! The crate computes the minimal edit sequence between two slices, turns it
//! into a patch that can be replayed step by step, detects element moves
//! (an "extended" diff) and diffs sequences of sequences two levels deep
//! (a "nested" diff for sectioned lists).
//!
//! ```
//! use differ_rs::{apply, diff, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let old: Vec<char> = "kitten".chars().collect();
//! let new: Vec<char> = "sitting".chars().collect();
//!
//! let patch = diff(&old, &new).patch(&old, &new);
//! assert_eq!(apply(&old, &patch)?, new);
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod errors;
pub mod extended;
pub mod extended_patch;
pub mod fuzz;
pub mod nested;
pub mod nested_extended;
pub mod patch;
pub mod sort;
pub mod trace;
pub mod traits;

pub use diff::{diff, diff_by, Diff, DiffElement};
pub use errors::Error;
pub use extended::{extended_diff, extended_diff_by, ExtendedDiff, ExtendedDiffElement};
pub use extended_patch::{apply_extended, extended_patch, extended_patch_sorted, ExtendedPatch};
pub use nested::{nested_diff, nested_diff_by, NestedDiff, NestedDiffElement};
pub use nested_extended::{
    nested_extended_diff, nested_extended_diff_by, NestedExtendedDiff, NestedExtendedDiffElement,
};
pub use patch::{apply, patch, Patch};
pub use sort::patch_sorted;
pub use trace::{diff_path_traces, diff_traces, Point, Trace};
pub use traits::SequenceDiff;
