//! Terminal input feeding the controller's channel

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use tracing::{debug, warn};

use super::Message;

/// Translate a terminal event into a controller message
#[must_use]
pub fn translate(event: CrosstermEvent) -> Option<Message> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Message::KeyInput(key))
        }
        CrosstermEvent::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

/// Handler that polls for terminal events
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    /// How long a poll waits before checking for shutdown
    poll_interval: Duration,
}

impl Handler {
    /// Create a new event handler with the given poll interval
    #[must_use]
    pub const fn new(poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Poll for the next relevant event
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next(&self) -> Result<Option<Message>> {
        if event::poll(self.poll_interval)? {
            Ok(translate(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Get the poll interval
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Read terminal events on a background thread until `stop` is set or
    /// the controller hangs up
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned
    pub fn spawn(
        self,
        sender: Sender<Message>,
        stop: Arc<AtomicBool>,
    ) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("gbt-input".to_string())
            .spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    match self.next() {
                        Ok(Some(message)) => {
                            if sender.send(message).is_err() {
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Failed to read terminal input: {e}");
                            break;
                        }
                    }
                }
                debug!("Input reader stopped");
            })
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(100)
    }
}
