//! Errors surfaced by the git gateway

use thiserror::Error;

/// Failure of a gateway operation.
///
/// Cloneable so a failure can travel inside a result message to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The working directory is not inside a git repository
    #[error("{0}")]
    RepositoryUnavailable(String),

    /// git ran but exited unsuccessfully
    #[error("{message}")]
    Command {
        /// The git invocation, for logging (e.g. `git branch -d topic`)
        command: String,
        /// Trimmed stderr, or the exit status when stderr was empty
        message: String,
    },

    /// The git binary could not be started
    #[error("failed to run git: {0}")]
    Spawn(String),
}

/// Result alias for gateway operations
pub type Result<T> = std::result::Result<T, Error>;
