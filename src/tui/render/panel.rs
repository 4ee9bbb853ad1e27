//! Side panel rendering: upstream and recent commits of the selected branch

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use super::colors;
use crate::app::{App, SidePanel};

const NO_UPSTREAM_HINT: &str = "Select a branch with an upstream to see commits.";
const NO_COMMITS: &str = "No commits to show.";

/// Cut `line` to at most `width` characters, marking the cut with "…"
pub fn truncate_line(line: &str, width: usize) -> String {
    if line.chars().count() <= width {
        return line.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = line.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

fn header_line(panel: &SidePanel, width: usize) -> Option<Line<'static>> {
    let branch = panel.branch.as_deref()?;
    let upstream = panel.upstream.as_deref().unwrap_or("no upstream");
    let text = truncate_line(&format!("{branch} — {upstream}"), width);

    let style = if panel.has_upstream() {
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_DIM)
    };
    Some(Line::styled(text, style))
}

/// Style `"<hash> <subject>"` with the hash highlighted
fn commit_line(line: &str, width: usize) -> Line<'static> {
    let line = truncate_line(line, width);
    if let Some((hash, subject)) = line.split_once(' ')
        && hash.len() >= 4
        && hash.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Line::from(vec![
            Span::styled(
                hash.to_string(),
                Style::default()
                    .fg(colors::COMMIT_HASH)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(subject.to_string(), Style::default().fg(colors::TEXT_PRIMARY)),
        ]);
    }
    Line::styled(line, Style::default().fg(colors::TEXT_PRIMARY))
}

fn content_lines(panel: &SidePanel, width: usize) -> Vec<Line<'static>> {
    if let Some(error) = &panel.log_error {
        return vec![Line::styled(
            truncate_line(&format!("⚠ {error}"), width),
            Style::default().fg(colors::ERROR),
        )];
    }

    if !panel.has_upstream() {
        return vec![Line::styled(
            NO_UPSTREAM_HINT,
            Style::default().fg(colors::TEXT_MUTED),
        )];
    }

    if panel.is_loading() {
        return vec![Line::styled(
            panel.log_text.clone(),
            Style::default().fg(colors::TEXT_MUTED),
        )];
    }

    if panel.log_text.trim().is_empty() {
        return vec![Line::styled(NO_COMMITS, Style::default().fg(colors::TEXT_MUTED))];
    }

    panel
        .log_text
        .lines()
        .map(|line| commit_line(line, width))
        .collect()
}

/// Render the side panel to the right of the list
pub fn render_panel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::SURFACE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // One column of padding after the border
    let inner = Rect {
        x: inner.x.saturating_add(1),
        width: inner.width.saturating_sub(1),
        ..inner
    };
    let width = usize::from(inner.width);

    let Some(header) = header_line(&app.panel, width) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(header), chunks[0]);
    frame.render_widget(
        Paragraph::new(Text::from(content_lines(&app.panel, width))),
        chunks[2],
    );
}
