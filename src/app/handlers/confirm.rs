//! Two-step delete confirmation
//!
//! Pressing the delete key on a branch arms the confirmation; pressing the
//! delete key again confirms. Cancel (Esc/n) disarms it. While armed, every
//! other key except quit is swallowed.

use tracing::debug;

use crate::app::Command;
use crate::app::state::{App, CANNOT_DELETE_CURRENT, Mode};
use crate::config::Action;

impl App {
    /// Delete key while browsing: arm the confirmation for the selected branch
    pub(super) fn request_delete(&mut self) -> Vec<Command> {
        let Some(branch) = self.list.selected() else {
            return Vec::new();
        };

        if branch.is_current || self.is_current(&branch.name) {
            self.set_error(CANNOT_DELETE_CURRENT);
            return Vec::new();
        }

        let target = branch.name.clone();
        debug!(branch = %target, "Awaiting delete confirmation");
        self.mode = Mode::ConfirmingDelete(target);
        self.clear_error();
        Vec::new()
    }

    /// Key handling while a delete is awaiting confirmation
    pub(super) fn handle_confirming(
        &mut self,
        target: String,
        action: Option<Action>,
    ) -> Vec<Command> {
        match action {
            Some(Action::Delete) => {
                debug!(branch = %target, "Delete confirmed");
                self.mode = Mode::Browsing;
                vec![Command::Delete(target), Command::ListBranches]
            }
            Some(Action::Cancel) => {
                debug!(branch = %target, "Delete cancelled");
                self.mode = Mode::Browsing;
                Vec::new()
            }
            Some(Action::Quit) => {
                self.should_quit = true;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Drop a pending confirmation whose target vanished or became checked out
    pub(super) fn revalidate_confirmation(&mut self) {
        let Mode::ConfirmingDelete(target) = &self.mode else {
            return;
        };

        let still_deletable =
            !self.is_current(target) && self.branches().iter().any(|b| &b.name == target);
        if !still_deletable {
            debug!(branch = %target, "Pending delete no longer valid");
            self.mode = Mode::Browsing;
        }
    }
}
