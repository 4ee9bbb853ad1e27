//! Key tables for browsing and filter editing

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Command;
use crate::app::state::{App, BranchList, Mode};
use crate::config::Action;

impl App {
    /// Route a key press to the active mode's key table
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        self.clear_notice();
        self.release_error();
        let action = self.config.keys.get_action(key.code, key.modifiers);

        match self.mode.clone() {
            Mode::ConfirmingDelete(target) => self.handle_confirming(target, action),
            Mode::Browsing if self.list.is_filtering() => self.handle_filter_key(key, action),
            Mode::Browsing => self.handle_browsing(action),
        }
    }

    fn handle_browsing(&mut self, action: Option<Action>) -> Vec<Command> {
        let Some(action) = action else {
            return Vec::new();
        };

        match action {
            Action::Quit => {
                self.should_quit = true;
                Vec::new()
            }
            Action::Checkout => match self.selected_branch() {
                Some(branch) => {
                    let name = branch.name.clone();
                    vec![Command::Checkout(name), Command::ListBranches]
                }
                None => Vec::new(),
            },
            Action::Delete => self.request_delete(),
            Action::Filter => {
                self.list.start_filter();
                Vec::new()
            }
            Action::Cancel => self.with_selection(BranchList::clear_filter),
            Action::NavigateUp => self.with_selection(BranchList::select_prev),
            Action::NavigateDown => self.with_selection(BranchList::select_next),
            Action::PageUp => self.with_selection(BranchList::page_up),
            Action::PageDown => self.with_selection(BranchList::page_down),
            Action::Top => self.with_selection(BranchList::select_first),
            Action::Bottom => self.with_selection(BranchList::select_last),
        }
    }

    /// While editing the filter, printable keys are text; arrows still move
    fn handle_filter_key(&mut self, key: KeyEvent, action: Option<Action>) -> Vec<Command> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.with_selection(BranchList::clear_filter),
            KeyCode::Enter => {
                self.list.accept_filter();
                Vec::new()
            }
            KeyCode::Backspace => self.with_selection(BranchList::pop_filter_char),
            KeyCode::Char(c) if !ctrl => self.with_selection(|list| list.push_filter_char(c)),
            KeyCode::Up => self.with_selection(BranchList::select_prev),
            KeyCode::Down => self.with_selection(BranchList::select_next),
            _ if action == Some(Action::Quit) => {
                self.should_quit = true;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
