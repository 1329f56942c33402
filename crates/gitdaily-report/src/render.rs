//! Plain text report output.

use std::io::{self, Write};

use chrono::NaiveDate;
use gitdaily_commit::CommitItem;

use crate::group_by_author;

/// Separator rule between report sections.
pub const RULE: &str =
    "-----------------------------------------------------------------------------";

/// Where separator rules are placed after the author blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A rule after every author block (single report).
    RuleAfterEachGroup,

    /// One rule after the last author block (interactive report).
    RuleAfterReport,
}

/// A daily report ready to be written.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    date: NaiveDate,
    commits: &'a [CommitItem],
}

impl<'a> Report<'a> {
    /// Creates a report of `commits` for `date`.
    #[must_use]
    pub fn new(date: NaiveDate, commits: &'a [CommitItem]) -> Self {
        Self { date, commits }
    }

    /// Writes the summary line and its rule.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Git daily report commits ({}) for {}",
            self.commits.len(),
            self.date.format("%Y-%m-%d")
        )?;
        writeln!(out, "{RULE}")
    }

    /// Writes one block per author with each trimmed message on its own line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_groups<W: Write>(&self, out: &mut W, layout: Layout) -> io::Result<()> {
        for group in group_by_author(self.commits) {
            writeln!(out, "[Author {}]", group.author)?;
            for commit in group.commits {
                writeln!(out, "{}", commit.trimmed_message())?;
            }
            if layout == Layout::RuleAfterEachGroup {
                writeln!(out, "{RULE}")?;
            }
        }

        if layout == Layout::RuleAfterReport {
            writeln!(out, "{RULE}")?;
        }
        Ok(())
    }

    /// Writes the whole report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write<W: Write>(&self, out: &mut W, layout: Layout) -> io::Result<()> {
        self.write_summary(out)?;
        self.write_groups(out, layout)
    }
}
