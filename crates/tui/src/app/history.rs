use tracing::{info, warn};

use crate::persist;

use super::{App, ConfirmAction};

impl App {
    pub fn open_history(&mut self) {
        self.show_history = true;
        self.history_scroll = 0;
    }

    pub fn close_history(&mut self) {
        self.show_history = false;
        self.history_area = None;
    }

    /// Ask before discarding; an empty history has nothing to confirm.
    pub fn request_clear(&mut self) {
        if !self.history.is_empty() {
            self.confirm = Some(ConfirmAction::ClearHistory);
        }
    }

    /// Drop every record, in memory and on disk.
    pub fn clear_history(&mut self) {
        info!(target: "tui", "clearing {} comparison(s)", self.history.len());
        self.history.clear();
        self.history_scroll = 0;
        if let Some(path) = self.history_path.as_deref() {
            if let Err(e) = persist::clear_history(path) {
                warn!(target: "tui", "history clear failed: {:#}", e);
            }
        }
    }

    // Rendered lines: prices + verdict per record, blank line between records.
    pub fn history_line_count(&self) -> usize {
        if self.history.is_empty() {
            1
        } else {
            self.history.len() * 3 - 1
        }
    }

    pub fn history_viewport(&self) -> u16 {
        self.history_area.map(|a| a.height).unwrap_or(0)
    }

    pub fn history_max_scroll(&self) -> u16 {
        let viewport = self.history_viewport() as usize;
        if viewport == 0 {
            0
        } else {
            self.history_line_count().saturating_sub(viewport) as u16
        }
    }

    pub fn history_scroll_by(&mut self, delta: i32) {
        let max = i32::from(self.history_max_scroll());
        let next = (i32::from(self.history_scroll) + delta).clamp(0, max);
        self.history_scroll = next as u16;
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::super::App;

    #[test]
    fn scroll_clamps_to_content() {
        let mut app = App::with_history_path(None);
        for _ in 0..10 {
            app.history.insert(
                0,
                flex_core::fuel::ComparisonRecord::new(
                    "3.50",
                    "5.00",
                    flex_core::fuel::Outcome::Ethanol,
                ),
            );
        }
        app.open_history();
        app.history_area = Some(Rect::new(0, 0, 40, 10));

        // 10 records -> 29 lines, viewport 10 -> max scroll 19
        assert_eq!(app.history_max_scroll(), 19);
        app.history_scroll_by(100);
        assert_eq!(app.history_scroll, 19);
        app.history_scroll_by(-100);
        assert_eq!(app.history_scroll, 0);
    }

    #[test]
    fn clear_is_not_offered_for_empty_history() {
        let mut app = App::with_history_path(None);
        app.request_clear();
        assert!(app.confirm.is_none());
    }
}
