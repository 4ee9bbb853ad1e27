//! Selection-driven loading of the side panel

use crate::app::Command;
use crate::app::state::{App, BranchList};
use crate::git;

impl App {
    /// Point the side panel at whatever the cursor is on now
    pub(super) fn track_selection(&mut self) -> Option<Command> {
        let selected = self.list.selected_name().map(str::to_string);
        self.panel.track(selected.as_deref())
    }

    /// Run a list operation and reload the side panel if it moved the
    /// selection to a different branch
    pub(super) fn with_selection(&mut self, change: impl FnOnce(&mut BranchList)) -> Vec<Command> {
        let before = self.list.selected_name().map(str::to_string);
        change(&mut self.list);
        if self.list.selected_name() == before.as_deref() {
            return Vec::new();
        }
        self.track_selection().into_iter().collect()
    }

    pub(super) fn on_upstream_resolved(
        &mut self,
        branch: &str,
        result: git::Result<Option<String>>,
    ) -> Vec<Command> {
        self.panel
            .upstream_resolved(branch, result)
            .into_iter()
            .collect()
    }

    pub(super) fn on_log_loaded(&mut self, reference: &str, result: git::Result<String>) {
        self.panel.log_loaded(reference, result);
    }
}
