//! Side panel: upstream and recent commits of the selected branch
//!
//! Lookups run in the background and may finish in any order. The panel
//! keeps two tokens, the branch it was last asked about and the upstream ref
//! it resolved to, and drops any result whose identity no longer matches.

use tracing::{debug, warn};

use crate::app::Command;
use crate::git;

/// Log text shown while the commits of a resolved upstream load
pub const LOADING_PLACEHOLDER: &str = "Loading…";

/// What the side panel shows for the selected branch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidePanel {
    /// Branch the panel refers to (the selection token)
    pub branch: Option<String>,
    /// Resolved upstream ref; `None` means none configured (or not yet known)
    pub upstream: Option<String>,
    /// Recent commits, one per line
    pub log_text: String,
    /// Why the commits could not be read
    pub log_error: Option<String>,
}

impl SidePanel {
    /// Create an empty panel
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the panel at a newly selected branch.
    ///
    /// Clears whatever was shown for the previous selection and returns the
    /// upstream lookup to issue, if a branch is selected at all.
    pub fn track(&mut self, branch: Option<&str>) -> Option<Command> {
        self.branch = branch.map(str::to_string);
        self.clear_details();
        branch.map(|b| Command::ResolveUpstream(b.to_string()))
    }

    /// Apply an upstream lookup result for `branch`.
    ///
    /// Returns the log request to issue when an upstream was found.
    pub fn upstream_resolved(
        &mut self,
        branch: &str,
        result: git::Result<Option<String>>,
    ) -> Option<Command> {
        if self.branch.as_deref() != Some(branch) {
            debug!(branch, selected = ?self.branch, "discarding stale upstream");
            return None;
        }

        let upstream = match result {
            Ok(Some(upstream)) if !upstream.trim().is_empty() => upstream,
            Ok(_) => {
                self.clear_details();
                return None;
            }
            Err(e) => {
                // Lookup failures read the same as "no upstream"
                warn!(branch, "Upstream lookup failed: {e}");
                self.clear_details();
                return None;
            }
        };

        self.upstream = Some(upstream.clone());
        self.log_text = LOADING_PLACEHOLDER.to_string();
        self.log_error = None;
        Some(Command::LoadLog(upstream))
    }

    /// Apply a commit log result for `reference`
    pub fn log_loaded(&mut self, reference: &str, result: git::Result<String>) {
        if self.upstream.as_deref() != Some(reference) {
            debug!(reference, upstream = ?self.upstream, "discarding stale log");
            return;
        }

        match result {
            Ok(text) => {
                self.log_text = text;
                self.log_error = None;
            }
            Err(e) => {
                warn!(reference, "Failed to read commits: {e}");
                self.log_text.clear();
                self.log_error = Some(e.to_string());
            }
        }
    }

    /// Whether the selected branch has no upstream to show commits for
    #[must_use]
    pub fn has_upstream(&self) -> bool {
        self.upstream.is_some()
    }

    /// Whether the log is still loading
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.upstream.is_some() && self.log_error.is_none() && self.log_text == LOADING_PLACEHOLDER
    }

    fn clear_details(&mut self) {
        self.upstream = None;
        self.log_text.clear();
        self.log_error = None;
    }
}
