//! Messages consumed by the controller, and the requests it emits

use crate::git::{self, Listing};
use ratatui::crossterm::event::KeyEvent;

/// Everything the controller reacts to.
///
/// Results of background requests carry the identity (branch or ref) they
/// were issued for, so a superseded result can be recognised on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A branch listing finished
    BranchesLoaded(git::Result<Listing>),
    /// The upstream lookup for `branch` finished
    UpstreamResolved {
        /// Branch the lookup was issued for
        branch: String,
        /// The upstream ref, `None` when the branch tracks nothing
        result: git::Result<Option<String>>,
    },
    /// The recent-commit lookup for `reference` finished
    LogLoaded {
        /// Ref the log was read from
        reference: String,
        /// Newline-separated `"<short hash> <subject>"` lines
        result: git::Result<String>,
    },
    /// `branch` was checked out
    CheckoutCompleted {
        /// The branch now checked out
        branch: String,
    },
    /// Checking out `branch` failed
    CheckoutFailed {
        /// The branch that could not be checked out
        branch: String,
        /// Why
        error: git::Error,
    },
    /// `branch` was deleted
    DeletionCompleted {
        /// The deleted branch
        branch: String,
    },
    /// Deleting `branch` failed
    DeletionFailed {
        /// The branch that is still there
        branch: String,
        /// Why
        error: git::Error,
    },
    /// Replace the status line
    StatusUpdate(String),
    /// A key was pressed
    KeyInput(KeyEvent),
    /// The terminal was resized
    Resize {
        /// New width in cells
        width: u16,
        /// New height in cells
        height: u16,
    },
}

/// A gateway request the controller wants performed.
///
/// Each command yields exactly one [`Message`] once the dispatcher has run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List local branches
    ListBranches,
    /// Check out a branch
    Checkout(String),
    /// Delete a branch
    Delete(String),
    /// Resolve a branch's upstream ref
    ResolveUpstream(String),
    /// Read the recent commits of a ref
    LoadLog(String),
}

impl Command {
    /// Short label used for worker thread names and logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ListBranches => "list",
            Self::Checkout(_) => "checkout",
            Self::Delete(_) => "delete",
            Self::ResolveUpstream(_) => "upstream",
            Self::LoadLog(_) => "log",
        }
    }

    /// The message reporting that this command failed with `error`
    #[must_use]
    pub fn failed(self, error: git::Error) -> Message {
        match self {
            Self::ListBranches => Message::BranchesLoaded(Err(error)),
            Self::Checkout(branch) => Message::CheckoutFailed { branch, error },
            Self::Delete(branch) => Message::DeletionFailed { branch, error },
            Self::ResolveUpstream(branch) => Message::UpstreamResolved {
                branch,
                result: Err(error),
            },
            Self::LoadLog(reference) => Message::LogLoaded {
                reference,
                result: Err(error),
            },
        }
    }
}
