//! Git operations module
//!
//! The controller never talks to git directly. It issues requests that the
//! dispatcher runs against a [`Gateway`], and only ever sees the results.

mod branch;
mod cli;
mod error;

pub use branch::{Branch, Listing};
pub use cli::CliGateway;
pub use error::{Error, Result};

use git2::Repository;
use std::path::{Path, PathBuf};

/// Number of commits shown in the side panel unless configured otherwise
pub const DEFAULT_LOG_LIMIT: usize = 5;

/// Synchronous query/mutation primitives the controller depends on.
///
/// Implementations may block; the dispatcher always calls them off the
/// controller's thread.
pub trait Gateway: Send + Sync {
    /// List local branches and the checked-out one
    ///
    /// # Errors
    ///
    /// Returns an error if the branches cannot be listed (usually: not a repository)
    fn list_branches(&self) -> Result<Listing>;

    /// Resolve the upstream ref of `branch`, `None` when it has none
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be queried
    fn resolve_upstream(&self, branch: &str) -> Result<Option<String>>;

    /// The most recent `limit` commits reachable from `reference`, formatted
    /// as `"<short hash> <subject>"`
    ///
    /// # Errors
    ///
    /// Returns an error if the ref cannot be read
    fn recent_commits(&self, reference: &str, limit: usize) -> Result<Vec<String>>;

    /// Check out `branch`
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout is refused (dirty tree, unknown branch, ...)
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Delete `branch`, refusing if it is not fully merged
    ///
    /// # Errors
    ///
    /// Returns an error if the branch cannot be deleted
    fn delete_branch(&self, branch: &str) -> Result<()>;
}

/// Open a git repository at the given path
///
/// # Errors
///
/// Returns an error if the path is not a git repository
pub fn open_repository(path: &Path) -> anyhow::Result<Repository> {
    use anyhow::Context;
    Repository::discover(path)
        .with_context(|| format!("Failed to open git repository at {}", path.display()))
}

/// Get the work tree root of the repository containing the given path
///
/// # Errors
///
/// Returns an error if the path is not inside a git repository, or the
/// repository is bare
pub fn repository_root(path: &Path) -> anyhow::Result<PathBuf> {
    use anyhow::Context;
    let repo = open_repository(path)?;
    repo.workdir()
        .map(Path::to_path_buf)
        .context("Repository has no working directory")
}

/// Short name shown in the header: the work tree's folder name.
///
/// Best effort: falls back to the given path's own folder name when the
/// path is not inside a repository.
#[must_use]
pub fn repo_display_name(path: &Path) -> String {
    let root = repository_root(path).unwrap_or_else(|_| path.to_path_buf());
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
