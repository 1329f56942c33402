//! Report sessions over an opened repository.

use std::io::Write;

use chrono::{NaiveDate, TimeZone};
use gitdaily_commit::{DayWindow, WindowPolicy};
use gitdaily_git::{GitResult, Repository};
use gitdaily_report::{Layout, Report};
use tracing::debug;

use crate::keys::{Key, KeySource};

/// Returns the day to show after `key`, or `None` to stop.
///
/// Stepping past the first or last representable day stays on that day.
pub fn navigate(date: NaiveDate, key: Key) -> Option<NaiveDate> {
    match key {
        Key::Left => Some(date.pred_opt().unwrap_or(date)),
        Key::Right => Some(date.succ_opt().unwrap_or(date)),
        Key::Other => None,
    }
}

/// Reports on one repository, with days interpreted in the time zone `tz`.
pub struct Session<'r, Tz: TimeZone> {
    repo: &'r Repository,
    policy: WindowPolicy,
    tz: Tz,
}

impl<'r, Tz: TimeZone> Session<'r, Tz> {
    /// Creates a session.
    pub fn new(repo: &'r Repository, policy: WindowPolicy, tz: Tz) -> Self {
        Self { repo, policy, tz }
    }

    /// Collects and writes the report for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if collection fails or the output cannot be written.
    pub fn report<W: Write>(
        &self,
        date: NaiveDate,
        layout: Layout,
        out: &mut W,
    ) -> GitResult<()> {
        let window = DayWindow::new(date, self.policy, &self.tz);
        let commits = self.repo.collect(&window, out)?;
        debug!(%date, policy = %self.policy, count = commits.len(), "collected commits");

        Report::new(date, &commits).write(out, layout)?;
        out.flush()?;
        Ok(())
    }

    /// Shows `start`, then steps a day back or forward on each arrow key until
    /// any other key is pressed. Returns the last day shown.
    ///
    /// # Errors
    ///
    /// Returns the first collection, output or input error; the loop stops there.
    pub fn navigate_from<W: Write>(
        &self,
        start: NaiveDate,
        out: &mut W,
        keys: &mut dyn KeySource,
    ) -> GitResult<NaiveDate> {
        let mut date = start;
        loop {
            self.report(date, Layout::RuleAfterReport, out)?;
            match navigate(date, keys.next_key()?) {
                Some(next) => date = next,
                None => return Ok(date),
            }
        }
    }
}
