use crate::actors::SearchMessage;
use crate::tui::ui::{self, HitAreas};
use crate::tui::view::{SharedView, ViewState};
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::layout::Position;
use ratatui::DefaultTerminal;
use ractor::ActorRef;
use std::time::Duration;
use tracing::{debug, error};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Pinned,
}

pub struct App {
    pub view: SharedView,
    controller: ActorRef<SearchMessage>,

    pub focus: Focus,
    /// Cursor position in the input, in chars
    pub cursor: usize,
    pub dropdown_highlight: usize,
    pub pinned_highlight: usize,
    pub hit_areas: HitAreas,

    pub should_quit: bool,
}

impl App {
    pub fn new(view: SharedView, controller: ActorRef<SearchMessage>) -> Self {
        Self {
            view,
            controller,
            focus: Focus::Input,
            cursor: 0,
            dropdown_highlight: 0,
            pinned_highlight: 0,
            hit_areas: HitAreas::default(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut redraw = tokio::time::interval(Duration::from_millis(50));

        loop {
            let state = self.view.snapshot();
            self.clamp(&state);
            let mut hit_areas = self.hit_areas;
            terminal.draw(|frame| hit_areas = ui::draw(frame, self, &state))?;
            self.hit_areas = hit_areas;

            tokio::select! {
                _ = redraw.tick() => {}
                event = events.next() => match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => self.handle_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => self.should_quit = true,
                },
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn send(&self, message: SearchMessage) {
        if let Err(e) = self.controller.send_message(message) {
            error!("Failed to send message to search controller: {}", e);
        }
    }

    fn clamp(&mut self, state: &ViewState) {
        self.cursor = self.cursor.min(state.input.chars().count());
        self.dropdown_highlight = self.dropdown_highlight.min(state.results.len().saturating_sub(1));
        self.pinned_highlight = self.pinned_highlight.min(state.pinned.len().saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Esc => self.send(SearchMessage::EscapePressed),
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Pinned => self.handle_pinned_key(key),
            },
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => {
                self.send(SearchMessage::OutsideClick);
                Focus::Pinned
            }
            Focus::Pinned => {
                self.send(SearchMessage::InputFocused);
                Focus::Input
            }
        };
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let text = {
            let mut view = self.view.lock();
            let byte_at = |s: &str, chars: usize| s.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(s.len());

            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let at = byte_at(&view.input, self.cursor);
                    view.input.insert(at, c);
                    self.cursor += 1;
                }
                KeyCode::Backspace if self.cursor > 0 => {
                    let at = byte_at(&view.input, self.cursor - 1);
                    view.input.remove(at);
                    self.cursor -= 1;
                }
                KeyCode::Delete if self.cursor < view.input.chars().count() => {
                    let at = byte_at(&view.input, self.cursor);
                    view.input.remove(at);
                }
                KeyCode::Left => {
                    self.cursor = self.cursor.saturating_sub(1);
                    return;
                }
                KeyCode::Right => {
                    self.cursor = (self.cursor + 1).min(view.input.chars().count());
                    return;
                }
                KeyCode::Up => {
                    self.dropdown_highlight = self.dropdown_highlight.saturating_sub(1);
                    return;
                }
                KeyCode::Down => {
                    if self.dropdown_highlight + 1 < view.results.len() {
                        self.dropdown_highlight += 1;
                    }
                    return;
                }
                KeyCode::Enter => {
                    if view.dropdown_visible && !view.results.is_empty() {
                        let index = self.dropdown_highlight;
                        drop(view);
                        self.dropdown_highlight = 0;
                        self.send(SearchMessage::SelectRow(index));
                    }
                    return;
                }
                _ => return,
            }

            view.input.clone()
        };

        self.send(SearchMessage::Input(text));
    }

    fn handle_pinned_key(&mut self, key: KeyEvent) {
        let pinned_len = self.view.lock().pinned.len();

        match key.code {
            KeyCode::Up => self.pinned_highlight = self.pinned_highlight.saturating_sub(1),
            KeyCode::Down => {
                if self.pinned_highlight + 1 < pinned_len {
                    self.pinned_highlight += 1;
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => {
                let id = self.view.lock().pinned.get(self.pinned_highlight).map(|entry| entry.id);
                if let Some(id) = id {
                    self.send(SearchMessage::RemovePinned(id));
                }
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        let areas = self.hit_areas;

        if areas.input.contains(position) {
            self.focus = Focus::Input;
            self.cursor = usize::MAX;
            self.send(SearchMessage::InputFocused);
            return;
        }

        if let Some(dropdown) = areas.dropdown.filter(|rect| rect.contains(position)) {
            // rows start below the top border
            if let Some(row) = mouse.row.checked_sub(dropdown.y + 1) {
                let row = row as usize;
                if row < areas.dropdown_rows {
                    self.send(SearchMessage::SelectRow(row));
                }
            }
            return;
        }

        self.send(SearchMessage::OutsideClick);

        if areas.pinned.contains(position) {
            self.focus = Focus::Pinned;
            // only inner rows map to entries; borders hit nothing
            let inner_rows = areas.pinned.height.saturating_sub(2);
            let Some(row) = mouse.row.checked_sub(areas.pinned.y + 1).filter(|row| *row < inner_rows) else {
                return;
            };
            let right_border = areas.pinned.right().saturating_sub(1);
            if mouse.column >= right_border {
                return;
            }
            let index = areas.pinned_offset + row as usize;
            let remove_column = right_border.saturating_sub(ui::REMOVE_CONTROL_WIDTH);

            let id = self.view.lock().pinned.get(index).map(|entry| entry.id);
            if let Some(id) = id {
                self.pinned_highlight = index;
                if mouse.column >= remove_column {
                    debug!(%id, "Remove control clicked");
                    self.send(SearchMessage::RemovePinned(id));
                }
            }
        }
    }
}
