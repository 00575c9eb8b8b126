//! The immutable, ordered run list returned by the engine.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::change::{Change, ChangeStatus};
use crate::error::DiffError;
use crate::stats::DiffStats;

/// The result of diffing two character sequences.
///
/// Runs appear in left-to-right order. Every run is non-empty and no two
/// neighbouring runs share a status. A `DiffResult` cannot be modified after
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Change>", into = "Vec<Change>")]
pub struct DiffResult {
    changes: Box<[Change]>,
}

impl DiffResult {
    /// Wrap runs produced by the engine, which upholds the invariants itself.
    pub(crate) fn from_runs(changes: Vec<Change>) -> Self {
        debug_assert!(validate(&changes).is_ok());
        Self {
            changes: changes.into_boxed_slice(),
        }
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns `true` if both inputs were empty.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Change> {
        self.changes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    pub fn as_slice(&self) -> &[Change] {
        &self.changes
    }

    /// Returns `true` if the two inputs were equal.
    pub fn is_unchanged(&self) -> bool {
        self.changes
            .iter()
            .all(|c| c.status() == ChangeStatus::Unchanged)
    }

    /// Rebuild the old sequence from removed and unchanged runs.
    pub fn old_text(&self) -> String {
        self.side_text(ChangeStatus::in_old)
    }

    /// Rebuild the new sequence from added and unchanged runs.
    pub fn new_text(&self) -> String {
        self.side_text(ChangeStatus::in_new)
    }

    /// Number of runs with the given status.
    pub fn count(&self, status: ChangeStatus) -> usize {
        self.changes.iter().filter(|c| c.status() == status).count()
    }

    /// Total characters kept from both sides. Equals the LCS length.
    pub fn unchanged_len(&self) -> usize {
        self.chars_with(ChangeStatus::Unchanged)
    }

    /// Total characters present only in the new sequence.
    pub fn added_len(&self) -> usize {
        self.chars_with(ChangeStatus::Added)
    }

    /// Total characters present only in the old sequence.
    pub fn removed_len(&self) -> usize {
        self.chars_with(ChangeStatus::Removed)
    }

    /// Summary counts and similarity ratio.
    pub fn stats(&self) -> DiffStats {
        DiffStats::new(
            self.len(),
            self.unchanged_len(),
            self.added_len(),
            self.removed_len(),
        )
    }

    fn side_text(&self, keep: impl Fn(ChangeStatus) -> bool) -> String {
        self.changes
            .iter()
            .filter(|c| keep(c.status()))
            .map(Change::text)
            .collect()
    }

    fn chars_with(&self, status: ChangeStatus) -> usize {
        self.changes
            .iter()
            .filter(|c| c.status() == status)
            .map(Change::char_len)
            .sum()
    }
}

fn validate(changes: &[Change]) -> Result<(), DiffError> {
    for (index, change) in changes.iter().enumerate() {
        if change.text().is_empty() {
            return Err(DiffError::EmptyRun { index });
        }
        if index > 0 && changes[index - 1].status() == change.status() {
            return Err(DiffError::AdjacentRuns {
                index,
                status: change.status(),
            });
        }
    }
    Ok(())
}

/// Accepts runs only if they are non-empty and maximal.
impl TryFrom<Vec<Change>> for DiffResult {
    type Error = DiffError;

    fn try_from(changes: Vec<Change>) -> Result<Self, Self::Error> {
        validate(&changes)?;
        Ok(Self {
            changes: changes.into_boxed_slice(),
        })
    }
}

impl From<DiffResult> for Vec<Change> {
    fn from(result: DiffResult) -> Self {
        result.changes.into_vec()
    }
}

impl Index<usize> for DiffResult {
    type Output = Change;

    fn index(&self, index: usize) -> &Change {
        &self.changes[index]
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl IntoIterator for DiffResult {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_vec().into_iter()
    }
}
