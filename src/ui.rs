//! The UI renders the application state into something visible and clickable.
//!
//! The draw function dispatches on the current view (gate or deck). The deck view shows the
//! TOC sidebar beside the document pane, with a status line underneath. Pane geometry is
//! exposed so the event loop can size the viewport and hit-test mouse clicks against the same
//! rectangles that were drawn.

use crate::app_state::{AppState, View};
use crate::gate::SessionStore;
use crate::nav::Navigation;
use crate::viewport::LineKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Width of the TOC sidebar, borders included.
pub const TOC_WIDTH: u16 = 36;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Screen rectangles of the deck view.
pub struct Panes {
    /// TOC sidebar, absent when the deck has no sections.
    pub toc: Option<Rect>,
    /// Document pane.
    pub document: Rect,
    /// Status line.
    pub status: Rect,
}

#[must_use]
/// Splits the screen into TOC, document and status panes.
pub fn panes(area: Rect, has_toc: bool) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    if !has_toc {
        return Panes {
            toc: None,
            document: rows[0],
            status: rows[1],
        };
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(TOC_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    Panes {
        toc: Some(columns[0]),
        document: columns[1],
        status: rows[1],
    }
}

fn bordered() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

#[must_use]
/// Inner area of the document pane, where deck rows are drawn.
pub fn document_inner(area: Rect, has_toc: bool) -> Rect {
    bordered().inner(panes(area, has_toc).document)
}

#[must_use]
/// First TOC entry shown when `rows` entries fit, chosen so the active entry is on screen.
pub fn toc_offset(nav: &Navigation, rows: usize) -> usize {
    nav.active_index()
        .map_or(0, |active| (active + 1).saturating_sub(rows))
}

#[must_use]
/// Index of the TOC entry drawn at (`column`, `row`), if any.
pub fn toc_entry_at(area: Rect, nav: &Navigation, column: u16, row: u16) -> Option<usize> {
    let inner = bordered().inner(panes(area, true).toc?);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let offset = toc_offset(nav, usize::from(inner.height));
    let index = offset + usize::from(row - inner.y);
    (index < nav.len()).then_some(index)
}

/// Renders the active view based on current application state.
pub fn draw<S: SessionStore>(f: &mut Frame, app: &AppState<S>) {
    match app.view {
        View::Gate => draw_gate(f, app),
        View::Deck => draw_deck(f, app),
    }
}

fn draw_gate<S: SessionStore>(f: &mut Frame, app: &AppState<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(f.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(50),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let mut lines = vec![
        Line::from("This deck is protected."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Password: "),
            Span::styled(
                "•".repeat(app.gate_input.chars().count()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if let Some(ref msg) = app.gate_message {
        lines.push(Line::from(""));
        lines.push(Line::styled(msg.clone(), Style::default().fg(Color::Red)));
    }

    let prompt = Paragraph::new(lines).block(bordered().title("Access"));
    f.render_widget(prompt, columns[1]);
}

fn draw_deck<S: SessionStore>(f: &mut Frame, app: &AppState<S>) {
    let nav = app.deck.navigation();
    let panes = panes(f.area(), app.has_toc());

    if let (Some(nav), Some(area)) = (nav, panes.toc) {
        draw_toc(f, nav, area);
    }

    let items: Vec<Line> = app
        .viewport
        .visible()
        .iter()
        .map(|line| Line::styled(line.text.clone(), line_style(line.kind)))
        .collect();

    let title = app.document.title.clone().unwrap_or_else(|| {
        app.location
            .resource()
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().to_string())
    });
    let document = Paragraph::new(items).block(bordered().title(title));
    f.render_widget(document, panes.document);

    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else if nav.is_some() {
        format!(
            "{} | n/p: Next/Prev | 1-9: Jump | ↑/↓ PgUp/PgDn: Scroll | q: Quit",
            app.location
        )
    } else {
        format!("{} | ↑/↓ PgUp/PgDn: Scroll | q: Quit", app.location)
    };
    let help_widget = Paragraph::new(help).block(bordered());
    f.render_widget(help_widget, panes.status);
}

fn draw_toc(f: &mut Frame, nav: &Navigation, area: Rect) {
    let items: Vec<ListItem> = nav
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.display_code.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::raw(entry.display_label.clone()),
            ]))
        })
        .collect();

    let block = bordered().title(nav.label().to_string());
    let rows = usize::from(block.inner(area).height);
    let mut state = ListState::default()
        .with_offset(toc_offset(nav, rows))
        .with_selected(nav.active_index());

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(list, area, &mut state);
}

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::DocTitle => Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED),
        LineKind::Heading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineKind::Subtitle => Style::default().add_modifier(Modifier::ITALIC),
        LineKind::ReflectionTitle => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LineKind::Reflection => Style::default().fg(Color::Yellow),
        LineKind::Body | LineKind::Blank => Style::default(),
    }
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
