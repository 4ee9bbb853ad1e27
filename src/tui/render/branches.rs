//! Branch list rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::colors;
use crate::app::{App, Branch};

fn branch_list_item<'a>(app: &App, branch: &'a Branch, selected: bool) -> ListItem<'a> {
    let pending = app.pending_delete() == Some(branch.name.as_str());

    let style = if selected {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .bg(colors::SURFACE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_PRIMARY)
    };

    let name_style = if pending {
        style.fg(colors::ERROR).add_modifier(Modifier::CROSSED_OUT)
    } else if branch.is_current {
        style.fg(colors::CURRENT_BRANCH)
    } else {
        style
    };

    let marker = if branch.is_current { "● " } else { "  " };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!(" {marker}"),
            style.fg(colors::CURRENT_BRANCH),
        ),
        Span::styled(branch.name.as_str(), name_style),
    ]))
    .style(style)
}

/// Render the (filtered) branch list, keeping the cursor in view
pub fn render_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let list = &app.list;

    if list.visible_len() == 0 {
        let message = if app.branches().is_empty() {
            " No branches".to_string()
        } else {
            format!(" No branches match “{}”", list.filter())
        };
        let empty = Paragraph::new(Line::styled(message, Style::default().fg(colors::TEXT_MUTED)))
            .style(Style::default().bg(colors::SURFACE));
        frame.render_widget(empty, area);
        return;
    }

    let selected = list.index();
    let items: Vec<ListItem<'_>> = list
        .visible_items()
        .enumerate()
        .map(|(i, branch)| branch_list_item(app, branch, i == selected))
        .collect();

    let widget = List::new(items).style(Style::default().bg(colors::SURFACE));

    let mut state = ListState::default()
        .with_offset(list.offset())
        .with_selected(Some(selected));
    frame.render_stateful_widget(widget, area, &mut state);
}
