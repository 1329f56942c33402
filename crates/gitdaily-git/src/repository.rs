//! Git repository wrapper.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{ErrorCode, Repository as Git2Repo, Sort};
use gitdaily_commit::{CommitItem, DayWindow};
use tracing::{debug, warn};

use crate::{GitError, GitResult};

/// A read-only Git repository handle.
///
/// The underlying libgit2 handle is released when this value is dropped.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens the repository named on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::MissingArgument`] if no path was given and
    /// [`GitError::InvalidRepository`] if the path is not a repository root.
    pub fn locate(path: Option<&Path>) -> GitResult<Self> {
        let path = path.ok_or(GitError::MissingArgument)?;
        Self::open(path)
    }

    /// Opens a repository at the given path.
    ///
    /// Parent directories are not searched.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::open(path).map_err(|_| GitError::InvalidRepository(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the last component of the repository root, if it is UTF-8.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.path().file_name().and_then(|name| name.to_str())
    }

    /// Returns the commits of this repository alone that fall in `window`.
    ///
    /// History is walked from HEAD. A HEAD on an unborn branch, as in an
    /// empty repository or after an orphan checkout, has no commits.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    pub fn commits_in(&self, window: &DayWindow) -> GitResult<Vec<CommitItem>> {
        match self.inner.head() {
            Ok(_) => {}
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                debug!(path = ?self.path(), "HEAD is unborn, no commits");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        }

        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;
            let committer = commit.committer();

            let Some(date) = committer_date(committer.when()) else {
                warn!(%oid, "skipping commit with out-of-range timestamp");
                continue;
            };
            if !window.contains(&date) {
                continue;
            }

            commits.push(CommitItem::new(
                String::from_utf8_lossy(commit.message_bytes()),
                String::from_utf8_lossy(committer.name_bytes()),
                date,
            ));
        }

        debug!(
            repo = self.name().unwrap_or_default(),
            matched = commits.len(),
            "walked history"
        );
        Ok(commits)
    }

    /// Collects the commits in `window` from this repository and all of its
    /// submodules, transitively.
    ///
    /// Progress lines about submodules are written to `diagnostics`.
    /// Submodule results are appended after this repository's own commits.
    ///
    /// # Errors
    ///
    /// Returns an error if any history cannot be read or any submodule cannot
    /// be opened. No partial result is returned.
    pub fn collect<W: Write>(
        &self,
        window: &DayWindow,
        diagnostics: &mut W,
    ) -> GitResult<Vec<CommitItem>> {
        let mut commits = self.commits_in(window)?;
        if self.inner.is_bare() {
            debug!(path = ?self.path(), "bare repository, no submodules");
            return Ok(commits);
        }

        let submodules = self.inner.submodules()?;
        if !submodules.is_empty() {
            writeln!(diagnostics, "Lookup submodules ({})...", submodules.len())?;
        }

        for submodule in &submodules {
            let name = submodule.name().unwrap_or("<unnamed>");
            let inner = submodule.open().map_err(|source| GitError::SubmoduleOpen {
                name: name.to_string(),
                source,
            })?;
            let nested = Self { inner };
            writeln!(diagnostics, "Submodule {name} opened")?;

            commits.extend(nested.collect(window, diagnostics)?);
        }

        Ok(commits)
    }
}

/// Converts a libgit2 timestamp into a chrono timestamp with its offset.
fn committer_date(time: git2::Time) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp(time.seconds(), 0).map(|t| t.with_timezone(&offset))
}
