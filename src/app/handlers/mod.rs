//! Message handlers for the application
//!
//! `App::update` is the only place state changes. It never touches git
//! itself: anything that needs the gateway comes back as a [`Command`] for
//! the dispatcher.

mod confirm;
mod keys;
mod selection;

use tracing::{info, warn};

use super::state::{App, NOT_A_REPOSITORY};
use super::{Command, Message};
use crate::git::{self, Listing};

impl App {
    /// Requests to issue at startup
    #[must_use]
    pub fn init(&self) -> Vec<Command> {
        vec![Command::ListBranches]
    }

    /// Apply one message, returning the requests it gives rise to
    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::Resize { width, height } => {
                self.resize(width, height);
                Vec::new()
            }
            Message::BranchesLoaded(result) => self.on_branches_loaded(result),
            Message::UpstreamResolved { branch, result } => {
                self.on_upstream_resolved(&branch, result)
            }
            Message::LogLoaded { reference, result } => {
                self.on_log_loaded(&reference, result);
                Vec::new()
            }
            Message::CheckoutCompleted { branch } => self.on_checkout_completed(&branch),
            Message::CheckoutFailed { branch, error } => {
                warn!(branch = %branch, "Checkout failed: {error}");
                self.hold_error(error.to_string());
                Vec::new()
            }
            Message::DeletionCompleted { branch } => {
                info!(branch = %branch, "Deleted branch");
                self.set_notice(format!("Deleted “{branch}”"));
                vec![Command::ListBranches]
            }
            Message::DeletionFailed { branch, error } => {
                warn!(branch = %branch, "Delete failed: {error}");
                self.hold_error(error.to_string());
                Vec::new()
            }
            Message::StatusUpdate(text) => {
                self.set_status(text);
                Vec::new()
            }
            Message::KeyInput(key) => self.handle_key(key),
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.list.set_height(usize::from(self.viewport.list_height()));
    }

    fn on_branches_loaded(&mut self, result: git::Result<Listing>) -> Vec<Command> {
        let listing = match result {
            Ok(listing) => listing,
            Err(e) => {
                // Keep the previous listing on screen
                warn!("Failed to list branches: {e}");
                self.set_error(e.to_string());
                self.status = NOT_A_REPOSITORY.to_string();
                return Vec::new();
            }
        };

        self.current = listing.current;
        // A failed mutation batched with this reload stays on screen
        if let Some(held) = self.held_error() {
            self.error = Some(held.to_string());
        } else {
            self.error = None;
            self.status = match (self.notice(), self.current.as_deref()) {
                (Some(notice), _) => notice.to_string(),
                (None, Some(current)) => format!("On {current}"),
                (None, None) => "HEAD detached".to_string(),
            };
        }

        self.list.set_items(listing.branches);
        if let Some(current) = self.current.clone() {
            self.list.select_name(&current);
        }
        self.revalidate_confirmation();

        self.track_selection().into_iter().collect()
    }

    fn on_checkout_completed(&mut self, branch: &str) -> Vec<Command> {
        if self.config.exit_on_checkout {
            info!(branch, "Checked out, exiting");
            self.should_quit = true;
            return Vec::new();
        }
        info!(branch, "Checked out");
        vec![Command::ListBranches]
    }
}
