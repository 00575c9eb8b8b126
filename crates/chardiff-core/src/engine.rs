//! LCS backtracking: classify every character of two sequences as removed,
//! added, or unchanged and group them into maximal runs.
//!
//! The walk starts at the bottom-right cell of the [`LengthTable`] and moves
//! towards the origin. At each cell it takes the first move that keeps the
//! LCS length:
//!
//! 1. left (`new[j - 1]` is added) when `table[i][j] == table[i][j - 1]`;
//! 2. up (`old[i - 1]` is removed) when `table[i][j] == table[i - 1][j]`;
//! 3. otherwise diagonally (`old[i - 1] == new[j - 1]` is unchanged).
//!
//! Because the walk runs end-to-start, checking "added" before "removed"
//! places the removed run first in the final output whenever both moves tie:
//! `compute("abc", "xyz")` is `[Removed("abc"), Added("xyz")]`. Changing the
//! order of these checks changes run boundaries on inputs with more than one
//! optimal alignment.

use std::ops::Range;

use tracing::{debug, trace};

use crate::change::{Change, ChangeStatus};
use crate::result::DiffResult;
use crate::table::LengthTable;

/// Diff two strings character by character.
pub fn compute(old: &str, new: &str) -> DiffResult {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    compute_chars(&old, &new)
}

/// Diff two already-decoded character sequences.
pub fn compute_chars(old: &[char], new: &[char]) -> DiffResult {
    DiffEngine::new(old, new).compute()
}

/// LCS diff over a borrowed pair of character sequences.
///
/// Time and space are both `O(len(old) · len(new))`. The table lives only
/// for the duration of [`compute`](DiffEngine::compute).
#[derive(Clone, Copy, Debug)]
pub struct DiffEngine<'a> {
    old: &'a [char],
    new: &'a [char],
}

impl<'a> DiffEngine<'a> {
    pub fn new(old: &'a [char], new: &'a [char]) -> Self {
        Self { old, new }
    }

    /// Length of the longest common subsequence of the two inputs.
    pub fn lcs_len(&self) -> usize {
        LengthTable::build(self.old, self.new).lcs_len()
    }

    /// Run the diff.
    ///
    /// # Panics
    ///
    /// Panics if backtracking takes a diagonal step across two different
    /// characters. That can only happen if the table is inconsistent with the
    /// inputs, which is a bug in this crate.
    pub fn compute(&self) -> DiffResult {
        let table = LengthTable::build(self.old, self.new);
        debug!(
            old_len = self.old.len(),
            new_len = self.new.len(),
            lcs_len = table.lcs_len(),
            "built LCS table"
        );

        let changes = self
            .backtrack(&table)
            .into_iter()
            .map(|span| self.materialize(span))
            .collect();
        DiffResult::from_runs(changes)
    }

    /// Walk the table from `(m, n)` to the origin. Returns spans in
    /// left-to-right order.
    fn backtrack(&self, table: &LengthTable) -> Vec<Span> {
        let (mut i, mut j) = (self.old.len(), self.new.len());
        let mut walk = Walk::default();

        while i > 0 && j > 0 {
            let here = table.get(i, j);
            if here == table.get(i, j - 1) {
                walk.enter(ChangeStatus::Added, i, j);
                j -= 1;
            } else if here == table.get(i - 1, j) {
                walk.enter(ChangeStatus::Removed, i, j);
                i -= 1;
            } else {
                assert!(
                    self.old[i - 1] == self.new[j - 1],
                    "diagonal step at ({i}, {j}) pairs {:?} with {:?}",
                    self.old[i - 1],
                    self.new[j - 1]
                );
                walk.enter(ChangeStatus::Unchanged, i, j);
                i -= 1;
                j -= 1;
            }
        }
        walk.close(i, j);

        // At most one of these is non-empty: the loop only stops once an
        // index reaches zero.
        walk.push(ChangeStatus::Added, 0..j);
        walk.push(ChangeStatus::Removed, 0..i);

        let mut spans = walk.spans;
        spans.reverse();
        spans
    }

    fn materialize(&self, span: Span) -> Change {
        let source = if span.status == ChangeStatus::Added {
            self.new
        } else {
            self.old
        };
        Change::new(span.status, source[span.range].iter().collect::<String>())
    }
}

/// A classified index range into `old` (removed, unchanged) or `new` (added).
#[derive(Clone, Debug, PartialEq, Eq)]
struct Span {
    status: ChangeStatus,
    range: Range<usize>,
}

/// Backtracking state: the open run (if any) and the spans closed so far,
/// in end-to-start order.
#[derive(Default)]
struct Walk {
    open: Option<OpenRun>,
    spans: Vec<Span>,
}

#[derive(Clone, Copy)]
struct OpenRun {
    status: ChangeStatus,
    end: usize,
}

impl Walk {
    /// Continue the open run if it already has `status`, otherwise close it
    /// and open a new one ending at the current cell.
    fn enter(&mut self, status: ChangeStatus, i: usize, j: usize) {
        if matches!(self.open, Some(run) if run.status == status) {
            return;
        }
        self.close(i, j);
        self.open = Some(OpenRun {
            status,
            end: position(status, i, j),
        });
    }

    fn close(&mut self, i: usize, j: usize) {
        if let Some(run) = self.open.take() {
            self.push(run.status, position(run.status, i, j)..run.end);
        }
    }

    fn push(&mut self, status: ChangeStatus, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        trace!(%status, start = range.start, end = range.end, "closed run");
        self.spans.push(Span { status, range });
    }
}

/// Index into the sequence a run of `status` is drawn from.
fn position(status: ChangeStatus, i: usize, j: usize) -> usize {
    match status {
        ChangeStatus::Added => j,
        ChangeStatus::Removed | ChangeStatus::Unchanged => i,
    }
}
