use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flex_core::fuel::{CompareError, ComparisonRecord, Outcome};
use ratatui::layout::Rect;
use tracing::info;

use crate::persist;

pub mod compare;
pub mod history;
pub mod input;

/// Which price field receives keystrokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Ethanol,
    Gasoline,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Focus::Ethanol => "Ethanol",
            Focus::Gasoline => "Gasoline",
        }
    }
}

#[derive(Clone, Copy)]
pub enum ConfirmAction {
    ClearHistory,
}

pub struct App {
    pub ethanol_input: String,
    pub ethanol_cursor: usize,
    pub gasoline_input: String,
    pub gasoline_cursor: usize,
    pub focus: Focus,
    pub last_result: Option<Result<Outcome, CompareError>>,
    pub history: Vec<ComparisonRecord>,
    pub history_path: Option<PathBuf>,
    pub show_history: bool,
    pub history_scroll: u16,
    pub show_help: bool,
    pub confirm: Option<ConfirmAction>,
    pub should_quit: bool,
    pub dirty: bool,
    // Inner areas recorded at draw time for mouse hit-testing.
    pub ethanol_area: Option<Rect>,
    pub gasoline_area: Option<Rect>,
    pub history_area: Option<Rect>,
}

impl App {
    pub fn new() -> Self {
        Self::with_history_path(persist::history_path())
    }

    pub fn with_history_path(history_path: Option<PathBuf>) -> Self {
        let history = history_path
            .as_deref()
            .map(persist::load_history)
            .unwrap_or_default();
        info!(target: "tui", "restored {} stored comparison(s)", history.len());
        Self {
            ethanol_input: String::new(),
            ethanol_cursor: 0,
            gasoline_input: String::new(),
            gasoline_cursor: 0,
            focus: Focus::Ethanol,
            last_result: None,
            history,
            history_path,
            show_history: false,
            history_scroll: 0,
            show_help: false,
            confirm: None,
            should_quit: false,
            dirty: true,
            ethanol_area: None,
            gasoline_area: None,
            history_area: None,
        }
    }

    pub fn overlay_open(&self) -> bool {
        self.show_history || self.show_help || self.confirm.is_some()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Ethanol => Focus::Gasoline,
            Focus::Gasoline => Focus::Ethanol,
        };
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.dirty = true;

        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        if let Some(action) = self.confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    match action {
                        ConfirmAction::ClearHistory => self.clear_history(),
                    }
                    self.confirm = None;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm = None;
                }
                _ => {}
            }
            return;
        }

        if self.show_history {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(2) => self.close_history(),
                KeyCode::Up => self.history_scroll_by(-1),
                KeyCode::Down => self.history_scroll_by(1),
                KeyCode::PageUp => {
                    self.history_scroll_by(-(i32::from(self.history_viewport()).max(1)));
                }
                KeyCode::PageDown => {
                    self.history_scroll_by(i32::from(self.history_viewport()).max(1));
                }
                KeyCode::Home => self.history_scroll = 0,
                KeyCode::End => self.history_scroll = self.history_max_scroll(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Up => self.focus = Focus::Ethanol,
            KeyCode::Down => self.focus = Focus::Gasoline,
            KeyCode::F(2) => self.open_history(),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_clear();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_field();
            }
            KeyCode::F(1) | KeyCode::Char('?') => self.show_help = true,
            KeyCode::Backspace => self.delete_left(),
            KeyCode::Delete => self.delete_right(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_line_start(),
            KeyCode::End => self.move_line_end(),
            KeyCode::Char(ch) => self.insert_char(ch),
            _ => {}
        }
    }
}
