use eframe::egui::{self, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::grid::{ColumnFilter, GridColumn};
use crate::state::{AppState, DerivedView};
use crate::theme;

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 22.0;

// ---------------------------------------------------------------------------
// Filterable data grid
// ---------------------------------------------------------------------------

/// Render the column filters and the table of visible penguins.
pub fn data_grid(ui: &mut Ui, state: &mut AppState, view: &DerivedView) {
    column_filters(ui, state);

    let rows = state.grid_filters.apply(&state.dataset, &view.indices);
    ui.label(
        RichText::new(format!("Viewing rows {} of {}", rows.len(), view.indices.len()))
            .small()
            .color(theme::TEXT_MUTED),
    );

    let dataset = &state.dataset;
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(70.0), GridColumn::ALL.len())
        .min_scrolled_height(0.0)
        .header(HEADER_HEIGHT, |mut header| {
            for column in GridColumn::ALL {
                header.col(|ui| {
                    ui.strong(column.header());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let Some(penguin) = dataset.penguins.get(rows[row.index()]) else {
                    return;
                };
                for column in GridColumn::ALL {
                    row.col(|ui| {
                        let cell = ui.label(column.cell_text(penguin));
                        if column == GridColumn::Species {
                            cell.on_hover_text(penguin.details());
                        }
                    });
                }
            });
        });
}

fn column_filters(ui: &mut Ui, state: &mut AppState) {
    let any_active = state.grid_filters.any_active();
    egui::CollapsingHeader::new(RichText::new("Column filters").strong())
        .id_salt("grid_filters")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("grid_filter_inputs")
                .num_columns(2)
                .show(ui, |ui: &mut Ui| {
                    for (column, filter) in &mut state.grid_filters.columns {
                        ui.label(column.header());
                        match filter {
                            ColumnFilter::Text(query) => {
                                ui.add(
                                    TextEdit::singleline(query)
                                        .hint_text("contains…")
                                        .desired_width(140.0),
                                );
                            }
                            ColumnFilter::Range { min, max } => {
                                ui.horizontal(|ui: &mut Ui| {
                                    ui.add(TextEdit::singleline(min).hint_text("min").desired_width(64.0));
                                    ui.add(TextEdit::singleline(max).hint_text("max").desired_width(64.0));
                                });
                            }
                        }
                        ui.end_row();
                    }
                });
            if any_active && ui.small_button("Clear column filters").clicked() {
                state.grid_filters.clear_all();
            }
        });
}
