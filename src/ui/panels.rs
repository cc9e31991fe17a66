use anyhow::Context;
use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::classify::{classify, ColumnClass};
use crate::data::loader;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(summary) = &state.summary {
            ui.label(format!("Rows: {}", summary.row_count));
            ui.label(format!("Columns: {}", summary.column_count));
            ui.label(format!("Types: {}", summary.distinct_type_count));
            ui.separator();
        }

        if let Some(table) = &state.table {
            if state.view.len() != table.row_count() {
                ui.label(format!(
                    "Showing {} of {} records",
                    state.view.len(),
                    table.row_count()
                ));
                ui.separator();
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel: column selector, a value widget matching the
/// column's classification, and the Apply / Reset buttons.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let columns: Vec<String> = table.columns().iter().map(|c| c.name.clone()).collect();
    let selected_column = state.filter_column.clone().unwrap_or_default();
    let (class, choices) = match state.filter_column.as_deref().and_then(|n| table.column(n)) {
        Some(column) => (
            Some(classify(column)),
            column
                .distinct_values()
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<String>>(),
        ),
        None => (None, Vec::new()),
    };

    let mut apply = false;
    let mut reset = false;

    ui.strong("Column");
    egui::ComboBox::from_id_salt("filter_column")
        .selected_text(selected_column.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(selected_column == *col, col).clicked() {
                    state.select_column(col.clone());
                }
            }
        });
    ui.add_space(4.0);

    match class {
        Some(ColumnClass::Categorical) => {
            // Enumerated choice: the empty entry means "no filter".
            ui.strong("Value");
            egui::ComboBox::from_id_salt("filter_value")
                .selected_text(state.filter_input.clone())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(state.filter_input.is_empty(), "")
                        .clicked()
                    {
                        state.filter_input.clear();
                        apply = true;
                    }
                    for choice in &choices {
                        if ui
                            .selectable_label(state.filter_input == *choice, choice)
                            .clicked()
                        {
                            state.filter_input = choice.clone();
                            apply = true;
                        }
                    }
                });
        }
        Some(ColumnClass::Continuous) => {
            ui.strong("Value (exact match)");
            let response = ui.text_edit_singleline(&mut state.filter_input);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                apply = true;
            }
        }
        None => {}
    }

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Apply").clicked() {
            apply = true;
        }
        if ui.button("Reset").clicked() {
            reset = true;
        }
    });

    state.filter_interaction(apply, reset);
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        let loaded =
            loader::load_file(&path).with_context(|| format!("loading {}", path.display()));
        match loaded {
            Ok(table) => {
                log::info!(
                    "loaded {} rows, {} columns from {}",
                    table.row_count(),
                    table.column_count(),
                    path.display()
                );
                state.set_table(table);
            }
            Err(e) => {
                // A failed load leaves the previous dataset visible.
                log::error!("failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
