use flex_core::fuel::{self, ComparisonRecord};
use tracing::{info, warn};

use crate::persist;

use super::App;

impl App {
    /// Run the comparator over the two fields. A verdict prepends a record
    /// and rewrites the stored history; invalid input only updates the
    /// verdict line and leaves the history untouched.
    pub fn submit(&mut self) {
        match fuel::compare(&self.ethanol_input, &self.gasoline_input) {
            Ok(outcome) => {
                info!(
                    target: "tui",
                    "compare: ethanol={} gasoline={} -> {}",
                    self.ethanol_input.trim(),
                    self.gasoline_input.trim(),
                    outcome.label()
                );
                let record =
                    ComparisonRecord::new(&self.ethanol_input, &self.gasoline_input, outcome);
                self.history.insert(0, record);
                self.last_result = Some(Ok(outcome));
                self.save_history();
            }
            Err(e) => {
                info!(target: "tui", "compare rejected: {}", e);
                self.last_result = Some(Err(e));
            }
        }
    }

    // Best effort: the in-memory list is authoritative, a failed write only
    // loses persistence across restarts.
    pub(crate) fn save_history(&self) {
        let Some(path) = self.history_path.as_deref() else {
            return;
        };
        if let Err(e) = persist::save_history(path, &self.history) {
            warn!(target: "tui", "history save failed: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use flex_core::fuel::{CompareError, Field, Outcome};
    use tempfile::TempDir;

    use super::super::App;
    use crate::persist;

    fn temp_app() -> (TempDir, App, PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(persist::HISTORY_FILE);
        let app = App::with_history_path(Some(path.clone()));
        (dir, app, path)
    }

    fn type_prices(app: &mut App, ethanol: &str, gasoline: &str) {
        app.clear_field();
        app.insert_text(ethanol);
        app.toggle_focus();
        app.clear_field();
        app.insert_text(gasoline);
        app.toggle_focus();
    }

    #[test]
    fn submit_records_newest_first() {
        let (_dir, mut app, _path) = temp_app();
        type_prices(&mut app, "3.50", "5.00");
        app.submit();
        type_prices(&mut app, "6.00", "7.00");
        app.submit();

        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[0].ethanol, "6.00");
        assert_eq!(app.history[0].outcome, Outcome::Gasoline);
        assert_eq!(app.history[1].ethanol, "3.50");
        assert_eq!(app.history[1].outcome, Outcome::Ethanol);
        assert_eq!(app.last_result, Some(Ok(Outcome::Gasoline)));
    }

    #[test]
    fn invalid_input_appends_nothing() {
        let (_dir, mut app, path) = temp_app();
        type_prices(&mut app, "3.50", "");
        app.submit();

        assert!(app.history.is_empty());
        assert_eq!(
            app.last_result,
            Some(Err(CompareError::Empty(Field::Gasoline)))
        );
        assert!(!path.exists());
    }

    #[test]
    fn history_survives_restart() {
        let (_dir, mut app, path) = temp_app();
        type_prices(&mut app, "3.50", "5.00");
        app.submit();
        type_prices(&mut app, "4.99", "5.09");
        app.submit();
        let before = app.history.clone();
        drop(app);

        let reopened = App::with_history_path(Some(path));
        assert_eq!(reopened.history, before);
    }

    #[test]
    fn clear_empties_memory_and_disk() {
        let (_dir, mut app, path) = temp_app();
        type_prices(&mut app, "3.50", "5.00");
        app.submit();
        assert!(path.exists());

        app.clear_history();
        assert!(app.history.is_empty());
        assert!(!path.exists());

        let reopened = App::with_history_path(Some(path));
        assert!(reopened.history.is_empty());
    }
}
