//! Selectable, filterable branch list

use crate::git::Branch;

/// The branch list the operator moves through.
///
/// Holds the full listing, the subset matching the filter, the cursor
/// within that subset, and the scroll offset for a viewport of `height` rows.
#[derive(Debug, Clone, Default)]
pub struct BranchList {
    items: Vec<Branch>,
    /// Indices into `items` matching the filter, in listing order
    visible: Vec<usize>,
    /// Cursor position within `visible`
    selected: usize,
    /// First visible row
    offset: usize,
    /// Rows available to the list body
    height: usize,
    filter: String,
    filtering: bool,
}

impl BranchList {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listing, keeping the filter and clamping the cursor
    pub fn set_items(&mut self, items: Vec<Branch>) {
        self.items = items;
        self.refilter(None);
    }

    /// All branches in listing order, ignoring the filter
    #[must_use]
    pub fn items(&self) -> &[Branch] {
        &self.items
    }

    /// Branches matching the filter, in listing order
    pub fn visible_items(&self) -> impl Iterator<Item = &Branch> + '_ {
        self.visible.iter().filter_map(|&i| self.items.get(i))
    }

    /// Number of branches matching the filter
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Cursor position within the visible branches
    #[must_use]
    pub const fn index(&self) -> usize {
        self.selected
    }

    /// First visible row given the current height
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The branch under the cursor, if any branch is visible
    #[must_use]
    pub fn selected(&self) -> Option<&Branch> {
        self.visible
            .get(self.selected)
            .and_then(|&i| self.items.get(i))
    }

    /// Name of the branch under the cursor
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selected().map(|b| b.name.as_str())
    }

    /// Move the cursor to the visible branch called `name`.
    ///
    /// Returns `false` (cursor untouched) when no such branch is visible.
    pub fn select_name(&mut self, name: &str) -> bool {
        let position = self
            .visible
            .iter()
            .position(|&i| self.items.get(i).is_some_and(|b| b.name == name));
        match position {
            Some(position) => {
                self.select(position);
                true
            }
            None => false,
        }
    }

    /// Move the cursor to `index`, clamped to the visible range
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.visible.len().saturating_sub(1));
        self.ensure_visible();
    }

    /// Move up one row (stops at the top)
    pub fn select_prev(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    /// Move down one row (stops at the bottom)
    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    /// Move up one page
    pub fn page_up(&mut self) {
        self.select(self.selected.saturating_sub(self.page()));
    }

    /// Move down one page
    pub fn page_down(&mut self) {
        self.select(self.selected.saturating_add(self.page()));
    }

    /// Jump to the first branch
    pub fn select_first(&mut self) {
        self.select(0);
    }

    /// Jump to the last branch
    pub fn select_last(&mut self) {
        self.select(usize::MAX);
    }

    /// Set the number of rows the list body may use
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.ensure_visible();
    }

    /// Rows available to the list body
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Current filter text
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether keystrokes are currently editing the filter
    #[must_use]
    pub const fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Start editing the filter
    pub const fn start_filter(&mut self) {
        self.filtering = true;
    }

    /// Stop editing, keeping the filter applied
    pub const fn accept_filter(&mut self) {
        self.filtering = false;
    }

    /// Stop editing and drop the filter
    pub fn clear_filter(&mut self) {
        self.filtering = false;
        if !self.filter.is_empty() {
            self.set_filter(String::new());
        }
    }

    /// Append a character to the filter
    pub fn push_filter_char(&mut self, c: char) {
        let mut filter = std::mem::take(&mut self.filter);
        filter.push(c);
        self.set_filter(filter);
    }

    /// Remove the last character of the filter
    pub fn pop_filter_char(&mut self) {
        let mut filter = std::mem::take(&mut self.filter);
        filter.pop();
        self.set_filter(filter);
    }

    fn set_filter(&mut self, filter: String) {
        let keep = self.selected_name().map(str::to_string);
        self.filter = filter;
        self.refilter(keep.as_deref());
    }

    /// Recompute the visible subset, keeping `keep` selected when it still matches
    fn refilter(&mut self, keep: Option<&str>) {
        let needle = self.filter.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, b)| needle.is_empty() || b.name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();

        if !keep.is_some_and(|name| self.select_name(name)) {
            self.select(self.selected);
        }
    }

    fn page(&self) -> usize {
        self.height.max(1)
    }

    fn ensure_visible(&mut self) {
        let max_offset = self.visible.len().saturating_sub(self.height.max(1));
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.height > 0 && self.selected >= self.offset + self.height {
            self.offset = self.selected + 1 - self.height;
        }
        self.offset = self.offset.min(max_offset);
    }
}
