//! Application state
//!
//! This module contains the main `App` struct (everything the renderer
//! reads) and its sub-states, organized into focused modules.

mod list;
mod panel;

pub use list::BranchList;
pub use panel::{LOADING_PLACEHOLDER, SidePanel};

use crate::config::Config;
use crate::git::Branch;

/// Status shown until the first listing arrives
pub const LOADING_STATUS: &str = "Loading…";

/// Status shown when the branch listing fails
pub const NOT_A_REPOSITORY: &str = "Not a repository";

/// Guidance shown when deleting the checked-out branch is attempted
pub const CANNOT_DELETE_CURRENT: &str = "You can’t delete the currently checked-out branch.";

/// Lines outside the list body: header, divider, footer
pub const RESERVED_LINES: u16 = 3;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Repository name shown in the header
    pub repo_name: String,

    /// Branch listing, filter and cursor
    pub list: BranchList,

    /// Checked-out branch, `None` until loaded or on a detached HEAD
    pub current: Option<String>,

    /// Status line text
    pub status: String,

    /// Error banner, shown instead of the status line while set
    pub error: Option<String>,

    /// Status that survives reloads until the next key press
    notice: Option<String>,

    /// Mutation failure that survives reloads until the next key press
    held_error: Option<String>,

    /// Current application mode
    pub mode: Mode,

    /// Upstream and commit log of the selected branch
    pub panel: SidePanel,

    /// Terminal size
    pub viewport: Viewport,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application in its startup state: no branches, loading
    #[must_use]
    pub fn new(config: Config, repo_name: impl Into<String>) -> Self {
        Self {
            config,
            repo_name: repo_name.into(),
            list: BranchList::new(),
            current: None,
            status: LOADING_STATUS.to_string(),
            error: None,
            notice: None,
            held_error: None,
            mode: Mode::Browsing,
            panel: SidePanel::new(),
            viewport: Viewport::default(),
            should_quit: false,
        }
    }

    /// All known branches in listing order
    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        self.list.items()
    }

    /// The branch under the cursor
    #[must_use]
    pub fn selected_branch(&self) -> Option<&Branch> {
        self.list.selected()
    }

    /// Whether `name` is the checked-out branch
    #[must_use]
    pub fn is_current(&self, name: &str) -> bool {
        self.current.as_deref() == Some(name)
    }

    /// Replace the status line and drop any error banner
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.error = None;
        self.held_error = None;
    }

    /// Show an error banner in place of the status line, dropping the status
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status.clear();
        self.error = Some(message.into());
    }

    /// Drop the error banner
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Keep `message` as the status across reloads until the next key press
    pub(crate) fn set_notice(&mut self, message: String) {
        self.set_status(message.clone());
        self.notice = Some(message);
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Show `message` as the error banner and keep it across reloads until
    /// the next key press
    pub(crate) fn hold_error(&mut self, message: String) {
        self.set_error(message.clone());
        self.held_error = Some(message);
    }

    pub(crate) fn held_error(&self) -> Option<&str> {
        self.held_error.as_deref()
    }

    pub(crate) fn release_error(&mut self) {
        self.held_error = None;
    }

    /// Branch awaiting delete confirmation, if any
    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        match &self.mode {
            Mode::ConfirmingDelete(target) => Some(target),
            Mode::Browsing => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default(), String::new())
    }
}

/// Application mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the branch list
    #[default]
    Browsing,
    /// Waiting for the operator to confirm deleting this branch
    ConfirmingDelete(String),
}

/// Terminal dimensions in cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Width in columns
    pub width: u16,
    /// Height in rows
    pub height: u16,
}

impl Viewport {
    /// Rows left for the list body once header, divider and footer are placed
    #[must_use]
    pub const fn list_height(self) -> u16 {
        self.height.saturating_sub(RESERVED_LINES)
    }
}
