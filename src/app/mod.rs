//! Application state and logic
//!
//! A single controller (`App::update`) consumes [`Message`]s and returns
//! [`Command`]s; the [`Dispatcher`] runs those against the git gateway on
//! worker threads and feeds the results back as more messages.

mod dispatch;
mod event;
mod handlers;
mod message;
mod state;

pub use dispatch::{Dispatcher, execute};
pub use event::{Handler, translate};
pub use message::{Command, Message};
pub use state::{
    App, BranchList, CANNOT_DELETE_CURRENT, LOADING_PLACEHOLDER, LOADING_STATUS, Mode,
    NOT_A_REPOSITORY, RESERVED_LINES, SidePanel, Viewport,
};

// Re-export Branch so it's available from app module
pub use crate::git::Branch;
