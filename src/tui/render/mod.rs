//! TUI rendering
//!
//! Draws a frame purely from [`App`]; nothing here changes state.
//! - `colors`: Color palette definitions
//! - `branches`: the branch list
//! - `panel`: upstream and recent commits of the selected branch

mod branches;
pub mod colors;
mod panel;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;

/// A side panel narrower than this is dropped and the list takes everything
const MIN_PANEL_WIDTH: u16 = 24;

/// Share of the body width given to the branch list
const LIST_PERCENT: u16 = 70;

/// The list never gets less than this while the panel is shown
const MIN_LIST_WIDTH: u16 = 50;

/// Split `width` into list and panel widths; the panel is 0 when dropped
fn body_widths(width: u16) -> (u16, u16) {
    let share = u16::try_from(u32::from(width) * u32::from(LIST_PERCENT) / 100).unwrap_or(width);
    let list = share.max(MIN_LIST_WIDTH).min(width);
    match width - list {
        panel if panel < MIN_PANEL_WIDTH => (width, 0),
        panel => (list, panel),
    }
}

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let confirm_height = u16::from(app.pending_delete().is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(confirm_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_divider(frame, chunks[1]);
    render_body(frame, app, chunks[2]);
    if let Some(target) = app.pending_delete() {
        render_confirmation(frame, target, chunks[3]);
    }
    render_footer(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let count = app.branches().len();
    let noun = if count == 1 { "branch" } else { "branches" };

    let mut spans = vec![
        Span::styled(
            " gbt ",
            Style::default()
                .fg(colors::SURFACE)
                .bg(colors::BRAND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.repo_name.as_str(),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {count} {noun}"),
            Style::default().fg(colors::TEXT_DIM),
        ),
    ];

    if app.list.is_filtering() || !app.list.filter().is_empty() {
        let cursor = if app.list.is_filtering() { "▏" } else { "" };
        spans.push(Span::styled("   /", Style::default().fg(colors::TEXT_MUTED)));
        spans.push(Span::styled(
            format!("{}{cursor}", app.list.filter()),
            Style::default().fg(colors::WARNING),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(header, area);
}

fn render_divider(frame: &mut Frame<'_>, area: Rect) {
    let rule = "─".repeat(usize::from(area.width));
    let divider = Paragraph::new(Line::styled(rule, Style::default().fg(colors::BORDER)))
        .style(Style::default().bg(colors::SURFACE));
    frame.render_widget(divider, area);
}

fn render_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (list_width, panel_width) = body_widths(area.width);
    if panel_width == 0 {
        branches::render_list(frame, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(list_width), Constraint::Length(panel_width)])
        .split(area);

    branches::render_list(frame, app, chunks[0]);
    panel::render_panel(frame, app, chunks[1]);
}

fn render_confirmation(frame: &mut Frame<'_>, target: &str, area: Rect) {
    let bar = Paragraph::new(Line::from(vec![
        Span::styled(
            " Press ⌫ again to delete ",
            Style::default().fg(colors::WARNING),
        ),
        Span::styled(
            format!("“{target}”"),
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (Esc to cancel)", Style::default().fg(colors::TEXT_DIM)),
    ]))
    .style(Style::default().bg(colors::SURFACE_HIGHLIGHT));
    frame.render_widget(bar, area);
}

fn render_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(error) = &app.error {
        let banner = Paragraph::new(Line::from(Span::styled(
            format!(" ⚠ {error} "),
            Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        )))
        .style(Style::default().bg(colors::SURFACE));
        frame.render_widget(banner, area);
        return;
    }

    let hints = if app.list.is_filtering() {
        "Enter keep filter   Esc clear".to_string()
    } else {
        app.config.keys.status_hints()
    };

    let status = Span::styled(
        format!(" {} ", app.status),
        Style::default().fg(colors::STATUS_OK),
    );
    let hints_span = Span::styled(format!(" {hints} "), Style::default().fg(colors::TEXT_DIM));

    // Status gets the room it needs; hints take what's left
    let status_width = u16::try_from(app.status.chars().count().saturating_add(2))
        .unwrap_or(u16::MAX)
        .min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(status_width), Constraint::Min(0)])
        .split(area);

    let left = Paragraph::new(Line::from(status)).style(Style::default().bg(colors::SURFACE));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(hints_span))
        .style(Style::default().bg(colors::SURFACE))
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}
