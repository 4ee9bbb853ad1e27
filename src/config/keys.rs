//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Logical actions that keys are bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move the selection up one branch
    NavigateUp,
    /// Move the selection down one branch
    NavigateDown,
    /// Move the selection up one page
    PageUp,
    /// Move the selection down one page
    PageDown,
    /// Jump to the first branch
    Top,
    /// Jump to the last branch
    Bottom,
    /// Check out the selected branch
    Checkout,
    /// Request deletion of the selected branch; pressed again, confirms it
    Delete,
    /// Cancel a pending deletion
    Cancel,
    /// Start editing the branch filter
    Filter,
    /// Quit application
    Quit,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NavigateUp => "Select previous",
            Self::NavigateDown => "Select next",
            Self::PageUp => "Page up",
            Self::PageDown => "Page down",
            Self::Top => "Select first",
            Self::Bottom => "Select last",
            Self::Checkout => "Checkout",
            Self::Delete => "Delete",
            Self::Cancel => "Cancel",
            Self::Filter => "Filter",
            Self::Quit => "Quit",
        }
    }
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("k".to_string(), Action::NavigateUp);
        bindings.insert("Up".to_string(), Action::NavigateUp);
        bindings.insert("j".to_string(), Action::NavigateDown);
        bindings.insert("Down".to_string(), Action::NavigateDown);
        bindings.insert("PageUp".to_string(), Action::PageUp);
        bindings.insert("PageDown".to_string(), Action::PageDown);
        bindings.insert("g".to_string(), Action::Top);
        bindings.insert("Home".to_string(), Action::Top);
        bindings.insert("G".to_string(), Action::Bottom);
        bindings.insert("End".to_string(), Action::Bottom);
        bindings.insert("Enter".to_string(), Action::Checkout);
        bindings.insert("Backspace".to_string(), Action::Delete);
        bindings.insert("Delete".to_string(), Action::Delete);
        bindings.insert("Esc".to_string(), Action::Cancel);
        bindings.insert("n".to_string(), Action::Cancel);
        bindings.insert("/".to_string(), Action::Filter);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Prefer single chars over named keys, then alphabetical
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => a.cmp(b),
            }
        });
        keys.join("/")
    }

    /// Footer hint text, e.g. `"Enter checkout   Backspace/Delete delete   q/Ctrl+c quit"`
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::NavigateUp, "up"),
            (Action::NavigateDown, "down"),
            (Action::Checkout, "checkout"),
            (Action::Delete, "delete"),
            (Action::Filter, "filter"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .filter_map(|(action, label)| {
                let keys = self.format_keys(*action);
                (!keys.is_empty()).then(|| format!("{keys} {label}"))
            })
            .collect::<Vec<_>>()
            .join("   ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
