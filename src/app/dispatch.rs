//! Runs gateway requests off the controller's thread

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use tracing::{debug, warn};

use super::{Command, Message};
use crate::git::{self, Gateway};

/// Run `command` against `gateway` and wrap the outcome in its result message.
///
/// Never fails: gateway errors become the error side of the message.
#[must_use]
pub fn execute(gateway: &dyn Gateway, command: Command, log_limit: usize) -> Message {
    match command {
        Command::ListBranches => Message::BranchesLoaded(gateway.list_branches()),
        Command::ResolveUpstream(branch) => {
            let result = gateway.resolve_upstream(&branch);
            Message::UpstreamResolved { branch, result }
        }
        Command::LoadLog(reference) => {
            let result = gateway
                .recent_commits(&reference, log_limit)
                .map(|lines| lines.join("\n"));
            Message::LogLoaded { reference, result }
        }
        Command::Checkout(branch) => match gateway.checkout(&branch) {
            Ok(()) => Message::CheckoutCompleted { branch },
            Err(error) => Message::CheckoutFailed { branch, error },
        },
        Command::Delete(branch) => match gateway.delete_branch(&branch) {
            Ok(()) => Message::DeletionCompleted { branch },
            Err(error) => Message::DeletionFailed { branch, error },
        },
    }
}

/// Fire-and-forget executor for [`Command`]s.
///
/// Every request runs on its own thread and reports back with exactly one
/// [`Message`] on the controller's channel. Requests are never cancelled;
/// the controller discards results it no longer cares about.
#[derive(Clone)]
pub struct Dispatcher {
    gateway: Arc<dyn Gateway>,
    sender: Sender<Message>,
    log_limit: usize,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("log_limit", &self.log_limit)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher that reports results on `sender`
    #[must_use]
    pub fn new(gateway: Arc<dyn Gateway>, sender: Sender<Message>, log_limit: usize) -> Self {
        Self {
            gateway,
            sender,
            log_limit,
        }
    }

    /// List local branches; answers with `BranchesLoaded`
    pub fn request_branch_list(&self) {
        self.spawn(Command::ListBranches);
    }

    /// Check out `branch`; answers with `CheckoutCompleted` or `CheckoutFailed`
    pub fn request_checkout(&self, branch: impl Into<String>) {
        self.spawn(Command::Checkout(branch.into()));
    }

    /// Delete `branch`; answers with `DeletionCompleted` or `DeletionFailed`
    pub fn request_delete(&self, branch: impl Into<String>) {
        self.spawn(Command::Delete(branch.into()));
    }

    /// Resolve the upstream of `branch`; answers with `UpstreamResolved`
    pub fn request_upstream(&self, branch: impl Into<String>) {
        self.spawn(Command::ResolveUpstream(branch.into()));
    }

    /// Read recent commits of `reference`; answers with `LogLoaded`
    pub fn request_log(&self, reference: impl Into<String>) {
        self.spawn(Command::LoadLog(reference.into()));
    }

    /// Run a batch of commands. No ordering holds between their results.
    pub fn dispatch_all(&self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    /// Run one command through its request constructor
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::ListBranches => self.request_branch_list(),
            Command::ResolveUpstream(branch) => self.request_upstream(branch),
            Command::LoadLog(reference) => self.request_log(reference),
            Command::Checkout(branch) => self.request_checkout(branch),
            Command::Delete(branch) => self.request_delete(branch),
        }
    }

    /// Run `command` on a fresh worker thread
    fn spawn(&self, command: Command) {
        debug!(?command, "dispatching");

        let gateway = Arc::clone(&self.gateway);
        let sender = self.sender.clone();
        let log_limit = self.log_limit;
        let fallback = command.clone();
        let label = command.label();

        let spawned = thread::Builder::new()
            .name(format!("gbt-{label}"))
            .spawn(move || {
                let message = execute(gateway.as_ref(), command, log_limit);
                if sender.send(message).is_err() {
                    debug!(label, "controller gone, dropping result");
                }
            });

        if let Err(e) = spawned {
            warn!(label, "Failed to spawn worker: {e}");
            let message = fallback.failed(git::Error::Spawn(e.to_string()));
            if self.sender.send(message).is_err() {
                debug!(label, "controller gone, dropping result");
            }
        }
    }
}
