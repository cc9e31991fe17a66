use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column as GridColumn, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data table (central panel)
// ---------------------------------------------------------------------------

/// Render the active view as a grid in the central panel.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV file to get started  (File → Open…)");
        });
        return;
    };

    if state.view.is_empty() {
        ui.add_space(12.0);
        ui.label(
            RichText::new("No matching records found with the current filter.")
                .color(Color32::YELLOW),
        );
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(GridColumn::auto().at_least(60.0), table.column_count())
        .header(20.0, |mut header| {
            for column in table.columns() {
                header.col(|ui| {
                    ui.strong(&column.name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.view.len(), |mut row| {
                let row_idx = state.view.indices()[row.index()];
                for column in table.columns() {
                    row.col(|ui| {
                        ui.label(column.values[row_idx].to_string());
                    });
                }
            });
        });
}
