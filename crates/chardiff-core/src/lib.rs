//! Character-level diff engine.
//!
//! Aligns two character sequences by their longest common subsequence and
//! reports the alignment as maximal runs of removed, added, and unchanged
//! characters.
//!
//! # Key Types
//!
//! - [`DiffEngine`] / [`compute`] -- LCS table fill and backtracking
//! - [`DiffResult`] -- Immutable, ordered list of runs
//! - [`Change`] / [`ChangeStatus`] -- A single classified run
//! - [`DiffStats`] -- Run counts, character counts, similarity ratio
//! - [`LengthTable`] -- Flat `(m + 1) × (n + 1)` LCS length table
//!
//! ```
//! use chardiff_core::{compute, ChangeStatus};
//!
//! let diff = compute("ab", "aXb");
//! assert_eq!(diff.len(), 3);
//! assert_eq!(diff[1].status(), ChangeStatus::Added);
//! assert_eq!(diff.new_text(), "aXb");
//! ```

pub mod change;
pub mod engine;
pub mod error;
pub mod result;
pub mod stats;
pub mod table;

pub use change::{Change, ChangeStatus};
pub use engine::{compute, compute_chars, DiffEngine};
pub use error::DiffError;
pub use result::DiffResult;
pub use stats::DiffStats;
pub use table::LengthTable;
