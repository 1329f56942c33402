//! Commit records for git-daily-report.
//!
//! This crate provides the plain data used throughout the report:
//! - [`CommitItem`]: the projection of one commit shown in a report
//! - [`DayWindow`]: the time window a report covers
//! - [`WindowPolicy`]: how a window matches committer timestamps

mod item;
mod window;

pub use item::CommitItem;
pub use window::{DayWindow, WindowPolicy};
