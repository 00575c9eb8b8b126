use serde::{Deserialize, Serialize};

/// Aggregate figures for a [`DiffResult`](crate::DiffResult).
///
/// Character counts are in `char`s, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of runs.
    pub runs: usize,
    /// Characters kept from both sides (the LCS length).
    pub unchanged: usize,
    /// Characters only in the new sequence.
    pub added: usize,
    /// Characters only in the old sequence.
    pub removed: usize,
    /// `2 * unchanged / (old_len + new_len)`, in `[0, 1]`. Two empty inputs
    /// are fully similar.
    pub similarity: f64,
}

impl DiffStats {
    pub fn new(runs: usize, unchanged: usize, added: usize, removed: usize) -> Self {
        let total = 2 * unchanged + added + removed;
        let similarity = if total == 0 {
            1.0
        } else {
            (2 * unchanged) as f64 / total as f64
        };
        Self {
            runs,
            unchanged,
            added,
            removed,
            similarity,
        }
    }

    /// Length of the old sequence.
    pub fn old_len(&self) -> usize {
        self.unchanged + self.removed
    }

    /// Length of the new sequence.
    pub fn new_len(&self) -> usize {
        self.unchanged + self.added
    }

    /// Characters touched by the edit script.
    pub fn edits(&self) -> usize {
        self.added + self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;

    #[test]
    fn empty_inputs_are_fully_similar() {
        let stats = compute("", "").stats();
        assert_eq!(stats.runs, 0);
        assert_eq!(stats.similarity, 1.0);
    }

    #[test]
    fn disjoint_inputs_have_zero_similarity() {
        let stats = compute("abc", "xyz").stats();
        assert_eq!(stats.runs, 2);
        assert_eq!(stats.similarity, 0.0);
        assert_eq!(stats.edits(), 6);
    }

    #[test]
    fn kitten_sitting_figures() {
        let stats = compute("kitten", "sitting").stats();
        assert_eq!(stats.unchanged, 4);
        assert_eq!(stats.old_len(), 6);
        assert_eq!(stats.new_len(), 7);
        assert!((stats.similarity - 8.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn identical_inputs_are_fully_similar() {
        let stats = compute("same", "same").stats();
        assert_eq!(stats, DiffStats::new(1, 4, 0, 0));
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.edits(), 0);
        assert_eq!(stats.similarity, 1.0);
    }
}
