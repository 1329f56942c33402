//! Git access layer for git-daily-report.
//!
//! This crate provides the read-only Git operations the report needs:
//! - Locating and opening a repository root
//! - Collecting the commits of a day window
//! - Following submodules transitively

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;
