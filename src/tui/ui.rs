use crate::models::format_stars;
use crate::tui::app::{App, Focus};
use crate::tui::view::ViewState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

pub const REMOVE_CONTROL_WIDTH: u16 = 3;
const REMOVE_CONTROL: &str = "[x]";

/// Screen regions from the last frame, used for mouse hit testing
#[derive(Debug, Default, Clone, Copy)]
pub struct HitAreas {
    pub input: Rect,
    pub dropdown: Option<Rect>,
    pub dropdown_rows: usize,
    pub pinned: Rect,
    pub pinned_offset: usize,
}

pub fn draw(frame: &mut Frame, app: &App, state: &ViewState) -> HitAreas {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search input
            Constraint::Min(3),    // Pinned list
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_input(frame, app, state, chunks[1]);
    let pinned_offset = draw_pinned(frame, app, state, chunks[2]);
    draw_hints(frame, app, chunks[3]);

    // Dropdown overlays the pinned list, directly under the input
    let dropdown = if state.dropdown_visible && !state.results.is_empty() {
        let height = (state.results.len() as u16 + 2).min(area.bottom().saturating_sub(chunks[2].y));
        let rect = Rect::new(chunks[1].x, chunks[2].y, chunks[1].width, height);
        draw_dropdown(frame, app, state, rect);
        Some(rect)
    } else {
        None
    };

    if app.focus == Focus::Input {
        let before_cursor: String = state.input.chars().take(app.cursor).collect();
        let cursor_x = chunks[1].x + 1 + before_cursor.chars().count() as u16;
        frame.set_cursor_position(Position::new(cursor_x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1));
    }

    HitAreas {
        input: chunks[1],
        dropdown,
        dropdown_rows: state.results.len(),
        pinned: chunks[2],
        pinned_offset,
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![Span::styled(
        " GitHub Search Repo ",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )]);
    frame.render_widget(Paragraph::new(title), area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_input(frame: &mut Frame, app: &App, state: &ViewState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::Input))
        .title(" Search repositories ");

    let content = if state.input.is_empty() && app.focus != Focus::Input {
        Line::from(Span::styled("Search repositories...", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(state.input.as_str())
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_dropdown(frame: &mut Frame, app: &App, state: &ViewState, area: Rect) {
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = state
        .results
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(record.name.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(record.owner.clone(), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(format!("\u{2605} {}", record.stars), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 50)).add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    if app.focus == Focus::Input {
        list_state.select(Some(app.dropdown_highlight));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Spaces between a pinned row's details and its remove control, counted in
/// terminal columns so wide glyphs keep the control flush right
pub fn pinned_row_padding(details: &str, inner_width: usize) -> usize {
    inner_width.saturating_sub(details.width() + REMOVE_CONTROL_WIDTH as usize)
}

/// Returns the scroll offset of the rendered list
fn draw_pinned(frame: &mut Frame, app: &App, state: &ViewState, area: Rect) -> usize {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::Pinned))
        .title(format!(" Pinned ({}) ", state.pinned.len()));

    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = state
        .pinned
        .iter()
        .map(|entry| {
            let details = format!(
                "Name: {}  Owner: {}  Stars: {}",
                entry.record.name,
                entry.record.owner,
                format_stars(entry.record.stars)
            );
            let padding = pinned_row_padding(&details, inner_width);
            ListItem::new(Line::from(vec![
                Span::raw(details),
                Span::raw(" ".repeat(padding)),
                Span::styled(REMOVE_CONTROL, Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 50)));

    let mut list_state = ListState::default();
    if app.focus == Focus::Pinned && !state.pinned.is_empty() {
        list_state.select(Some(app.pinned_highlight));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
    list_state.offset()
}

fn draw_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Input => " type to search | \u{2191}\u{2193} move | Enter pin | Esc close | Tab pinned | Ctrl+C quit",
        Focus::Pinned => " \u{2191}\u{2193} move | x remove | Tab search | q quit",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        area,
    );
}
