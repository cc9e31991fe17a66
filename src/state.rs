use crate::data::coerce::coerce;
use crate::data::filter::{apply_filter, View};
use crate::data::model::Table;
use crate::data::summary::{summarize, Summary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Holds at most one table and
/// one active view; the view always indexes into the currently held table.
pub struct AppState {
    /// Loaded dataset (None until the user loads a file).
    pub table: Option<Table>,

    /// Rows currently shown. Full after a load or reset, restricted after a
    /// successful filter application.
    pub view: View,

    /// Counts computed once per load.
    pub summary: Option<Summary>,

    /// Column the next filter applies to.
    pub filter_column: Option<String>,

    /// Raw filter text as entered; coerced on application.
    pub filter_input: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            view: View::default(),
            summary: None,
            filter_column: None,
            filter_input: String::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table, replacing the previous one. The active
    /// view is rebuilt as the new table's full view so it can never index
    /// into a stale table.
    pub fn set_table(&mut self, table: Table) {
        self.view = View::full(&table);
        self.summary = Some(summarize(&table));
        self.filter_column = table.columns().first().map(|c| c.name.clone());
        self.filter_input.clear();
        self.status_message = None;
        self.table = Some(table);
    }

    /// Change the column the next filter applies to. The pending input is
    /// cleared (it was typed against the old column); the active view stays
    /// as it is until a new filter is applied.
    pub fn select_column(&mut self, name: String) {
        if self.filter_column.as_deref() != Some(name.as_str()) {
            self.filter_column = Some(name);
            self.filter_input.clear();
            self.status_message = None;
        }
    }

    /// Handle one filter interaction. A reset request wins over a
    /// simultaneously submitted filter value.
    pub fn filter_interaction(&mut self, apply_requested: bool, reset_requested: bool) {
        if reset_requested {
            self.reset_filter();
        } else if apply_requested {
            self.apply_current_filter();
        }
    }

    /// Coerce the pending input and filter the table with it.
    ///
    /// Empty input and coercion failures leave the active view untouched;
    /// a failure additionally surfaces an error message.
    pub fn apply_current_filter(&mut self) {
        let Some(table) = &self.table else { return };
        let Some(column_name) = self.filter_column.clone() else {
            return;
        };
        let Some(column) = table.column(&column_name) else {
            return;
        };

        match coerce(column, &self.filter_input) {
            Ok(Some(value)) => {
                self.view = apply_filter(table, &column_name, &value);
                self.status_message = None;
                log::info!(
                    "filter {column_name} == {value}: {} of {} rows",
                    self.view.len(),
                    table.row_count()
                );
            }
            Ok(None) => {
                // Nothing entered: keep whatever is currently shown, but
                // drop any error from an earlier attempt.
                self.status_message = None;
            }
            Err(e) => {
                log::error!("filter rejected: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Drop the active filter and show the full table again.
    pub fn reset_filter(&mut self) {
        if let Some(table) = &self.table {
            self.view = View::full(table);
            self.filter_input.clear();
            self.status_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_bytes;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_table(load_bytes(b"name,age\na,5\nb,5\nc,7\n").unwrap());
        state
    }

    fn filter(state: &mut AppState, column: &str, input: &str) {
        state.filter_column = Some(column.to_string());
        state.filter_input = input.to_string();
        state.apply_current_filter();
    }

    #[test]
    fn load_starts_with_the_full_view_and_summary() {
        let state = loaded_state();
        assert_eq!(state.view.len(), 3);
        assert_eq!(state.summary.unwrap().column_count, 2);
        assert_eq!(state.filter_column.as_deref(), Some("name"));
    }

    #[test]
    fn filtering_restricts_the_view() {
        let mut state = loaded_state();
        filter(&mut state, "age", "5");
        assert_eq!(state.view.len(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn zero_matches_is_a_valid_filtered_state() {
        let mut state = loaded_state();
        filter(&mut state, "age", "99");
        assert!(state.view.is_empty());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn coercion_failure_keeps_the_view_and_reports() {
        let mut state = loaded_state();
        filter(&mut state, "age", "5");
        filter(&mut state, "age", "x");
        assert_eq!(state.view.len(), 2);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn empty_input_leaves_the_view_unchanged() {
        let mut state = loaded_state();
        filter(&mut state, "age", "5");
        filter(&mut state, "age", "");
        assert_eq!(state.view.len(), 2);
    }

    #[test]
    fn empty_input_clears_a_previous_error() {
        let mut state = loaded_state();
        filter(&mut state, "age", "x");
        assert!(state.status_message.is_some());

        filter(&mut state, "age", "");
        assert!(state.status_message.is_none());
    }

    #[test]
    fn reset_restores_all_rows() {
        let mut state = loaded_state();
        filter(&mut state, "age", "5");
        state.reset_filter();
        assert_eq!(state.view.len(), 3);
        assert!(state.filter_input.is_empty());
    }

    #[test]
    fn reset_wins_over_a_simultaneous_filter_value() {
        let mut state = loaded_state();
        state.filter_column = Some("age".to_string());
        state.filter_input = "5".to_string();
        state.filter_interaction(true, true);
        assert_eq!(state.view.len(), 3);
    }

    #[test]
    fn reloading_replaces_table_and_view_together() {
        let mut state = loaded_state();
        filter(&mut state, "age", "5");

        state.set_table(load_bytes(b"x\n1\n2\n3\n4\n").unwrap());
        assert_eq!(state.view.len(), 4);
        assert_eq!(state.filter_column.as_deref(), Some("x"));
        assert!(state.filter_input.is_empty());
    }

    #[test]
    fn selecting_another_column_clears_the_pending_input() {
        let mut state = loaded_state();
        state.filter_input = "5".to_string();
        state.select_column("age".to_string());
        assert!(state.filter_input.is_empty());

        // Re-selecting the same column is not a change.
        state.filter_input = "7".to_string();
        state.select_column("age".to_string());
        assert_eq!(state.filter_input, "7");
    }

    #[test]
    fn selecting_another_column_clears_a_previous_error() {
        let mut state = loaded_state();
        filter(&mut state, "age", "x");
        assert!(state.status_message.is_some());

        state.select_column("name".to_string());
        assert!(state.status_message.is_none());
    }
}
