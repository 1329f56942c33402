//! Day windows used to select commits.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// How a [`DayWindow`] matches committer timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPolicy {
    /// Only commits recorded on the target day.
    #[default]
    Day,

    /// Every commit recorded after the target day started, with no upper bound.
    Since,
}

impl fmt::Display for WindowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => f.write_str("day"),
            Self::Since => f.write_str("since"),
        }
    }
}

/// The span of time a report covers.
///
/// The bounds are computed once from the calendar day and a time zone, so
/// matching a timestamp is a plain instant comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
    policy: WindowPolicy,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// Creates a window for `date` as seen in the time zone `tz`.
    #[must_use]
    pub fn new<Tz: TimeZone>(date: NaiveDate, policy: WindowPolicy, tz: &Tz) -> Self {
        let start = start_of_day(date, tz);
        let end = date
            .succ_opt()
            .map_or(DateTime::<Utc>::MAX_UTC, |next| start_of_day(next, tz));

        Self {
            date,
            policy,
            start,
            end,
        }
    }

    /// Returns the target calendar day.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the matching policy.
    #[must_use]
    pub fn policy(&self) -> WindowPolicy {
        self.policy
    }

    /// Returns the instant the target day starts.
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns true if a commit recorded at `when` belongs to this window.
    pub fn contains<Tz: TimeZone>(&self, when: &DateTime<Tz>) -> bool {
        let instant = when.with_timezone(&Utc);
        match self.policy {
            WindowPolicy::Day => self.start <= instant && instant < self.end,
            WindowPolicy::Since => instant > self.start,
        }
    }
}

/// Midnight of `date` in `tz`. A midnight skipped by a DST jump moves to the
/// first wall-clock quarter hour that exists.
fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=4 * 24)
        .find_map(|quarter| {
            let local = midnight.checked_add_signed(TimeDelta::minutes(15 * quarter))?;
            tz.from_local_datetime(&local).earliest()
        })
        .map_or_else(|| midnight.and_utc(), |t| t.with_timezone(&Utc))
}
