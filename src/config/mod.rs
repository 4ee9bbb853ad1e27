//! Configuration for gbt
//!
//! Built from command-line flags at startup; nothing is read from or written
//! to disk.

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::git::DEFAULT_LOG_LIMIT;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Number of commits shown in the side panel
    #[serde(default = "default_log_limit")]
    pub log_limit: usize,

    /// Quit right after a successful checkout instead of reloading
    #[serde(default)]
    pub exit_on_checkout: bool,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

const fn default_log_limit() -> usize {
    DEFAULT_LOG_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_limit: default_log_limit(),
            exit_on_checkout: false,
            keys: KeyBindings::default(),
        }
    }
}
