//! Report rendering for git-daily-report.
//!
//! Commits are grouped by author in first-seen order and written as plain
//! text blocks to any [`std::io::Write`].

mod group;
mod render;

pub use group::{AuthorGroup, group_by_author};
pub use render::{Layout, RULE, Report};
