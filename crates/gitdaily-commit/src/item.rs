//! Commit projection used by reports.

use chrono::{DateTime, FixedOffset};

/// A commit as shown in a daily report.
///
/// Only the message, committer timestamp and committer name are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitItem {
    /// The full commit message, untrimmed.
    pub message: String,

    /// The committer timestamp with the offset it was recorded in.
    pub date: DateTime<FixedOffset>,

    /// The committer display name.
    pub author: String,
}

impl CommitItem {
    /// Creates a new commit item.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        author: impl Into<String>,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            message: message.into(),
            date,
            author: author.into(),
        }
    }

    /// Returns the message without surrounding whitespace.
    #[must_use]
    pub fn trimmed_message(&self) -> &str {
        self.message.trim()
    }
}
