//! Classified runs of characters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a run of characters relates the old sequence to the new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    /// Present only in the old sequence.
    Removed,
    /// Present only in the new sequence.
    Added,
    /// Present in both sequences at this alignment.
    Unchanged,
}

impl ChangeStatus {
    /// Returns `true` if runs with this status consume characters of `old`.
    pub fn in_old(self) -> bool {
        matches!(self, ChangeStatus::Removed | ChangeStatus::Unchanged)
    }

    /// Returns `true` if runs with this status consume characters of `new`.
    pub fn in_new(self) -> bool {
        matches!(self, ChangeStatus::Added | ChangeStatus::Unchanged)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeStatus::Removed => "removed",
            ChangeStatus::Added => "added",
            ChangeStatus::Unchanged => "unchanged",
        };
        f.write_str(name)
    }
}

/// A maximal run of characters sharing one [`ChangeStatus`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    status: ChangeStatus,
    text: String,
}

impl Change {
    pub fn new(status: ChangeStatus, text: impl Into<String>) -> Self {
        Self {
            status,
            text: text.into(),
        }
    }

    pub fn status(&self) -> ChangeStatus {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of `char`s in the run (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Word-diff style: `[-removed-]`, `{+added+}`, unchanged text verbatim.
impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ChangeStatus::Removed => write!(f, "[-{}-]", self.text),
            ChangeStatus::Added => write!(f, "{{+{}+}}", self.text),
            ChangeStatus::Unchanged => f.write_str(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_sides() {
        assert!(ChangeStatus::Removed.in_old());
        assert!(!ChangeStatus::Removed.in_new());
        assert!(ChangeStatus::Added.in_new());
        assert!(!ChangeStatus::Added.in_old());
        assert!(ChangeStatus::Unchanged.in_old());
        assert!(ChangeStatus::Unchanged.in_new());
    }

    #[test]
    fn char_len_counts_scalars() {
        let change = Change::new(ChangeStatus::Added, "héllo");
        assert_eq!(change.char_len(), 5);
        assert_eq!(change.text().len(), 6);
    }

    #[test]
    fn display_uses_word_diff_markers() {
        assert_eq!(Change::new(ChangeStatus::Removed, "old").to_string(), "[-old-]");
        assert_eq!(Change::new(ChangeStatus::Added, "new").to_string(), "{+new+}");
        assert_eq!(Change::new(ChangeStatus::Unchanged, "same").to_string(), "same");
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&Change::new(ChangeStatus::Unchanged, "x")).unwrap();
        assert_eq!(json, r#"{"status":"unchanged","text":"x"}"#);
    }
}
