//! Git error types.

use std::path::PathBuf;

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// No repository path was given.
    #[error("Missing git path argument. Please pass the repository path as the first argument")]
    MissingArgument,

    /// The path is not a repository root.
    #[error("Invalid git path {0}. Please pass a repository root as the first argument")]
    InvalidRepository(PathBuf),

    /// A submodule could not be opened.
    #[error("cannot open submodule {name}: {source}")]
    SubmoduleOpen {
        /// The submodule name from `.gitmodules`.
        name: String,
        /// The underlying libgit2 error.
        source: git2::Error,
    },

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
