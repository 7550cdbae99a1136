use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::parse_hex;
use crate::config::DashboardConfig;
use crate::data::model::Species;
use crate::data::summary::format_mm;
use crate::state::{AppState, DerivedView};
use crate::theme;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and links
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, config: &DashboardConfig) {
    ui.heading("Filter controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Mass slider ----
            ui.strong("Mass");
            let mut mass = state.filters().mass_threshold;
            let slider = egui::Slider::new(&mut mass, state.mass_bounds.clone())
                .step_by(1.0)
                .suffix(" g");
            if ui.add(slider).changed() {
                state.set_mass_threshold(mass);
            }
            ui.add_space(8.0);

            // ---- Species checkbox group ----
            ui.strong("Species");
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_species();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_species();
                }
            });
            for species in Species::ALL {
                let mut checked = state.filters().selected_species.contains(&species);
                let label = format!("{}  ({})", species.label(), state.dataset.species_count(species));
                let text = RichText::new(label).color(state.color_map.color_for(species));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_species(species);
                }
            }
            ui.add_space(4.0);
            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }

            ui.separator();

            // ---- Links ----
            ui.label(RichText::new("Links").strong().small());
            for link in &config.links {
                ui.hyperlink_to(link.label.as_str(), &link.url);
            }
        });
}

// ---------------------------------------------------------------------------
// Value boxes
// ---------------------------------------------------------------------------

/// The three summary boxes across the top of the main panel.
pub fn value_boxes(ui: &mut Ui, view: &DerivedView, config: &DashboardConfig) {
    let summary = &view.summary;
    let boxes = [
        ("Number of penguins", summary.count.to_string()),
        ("Average bill length", format_mm(summary.mean_bill_length_mm)),
        ("Average bill depth", format_mm(summary.mean_bill_depth_mm)),
    ];

    ui.columns(boxes.len(), |cols: &mut [Ui]| {
        for ((ui, (title, value)), hex) in cols.iter_mut().zip(boxes).zip(&config.value_box_colors) {
            let fill = parse_hex(hex).unwrap_or(theme::ACCENT);
            value_box(ui, title, &value, fill);
        }
    });
}

fn value_box(ui: &mut Ui, title: &str, value: &str, fill: Color32) {
    egui::Frame::default()
        .fill(fill)
        .inner_margin(theme::CARD_MARGIN)
        .corner_radius(6.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_min_height(theme::VALUE_BOX_HEIGHT);
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(theme::TEXT_PRIMARY));
            ui.label(RichText::new(value).size(28.0).strong().color(theme::TEXT_PRIMARY));
        });
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// A titled card filling the space it is given.
pub fn card(ui: &mut Ui, title: &str, body: impl FnOnce(&mut Ui)) {
    egui::Frame::default()
        .fill(theme::BG_CARD)
        .inner_margin(theme::CARD_MARGIN)
        .corner_radius(6.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().color(theme::TEXT_MUTED));
            ui.separator();
            body(ui);
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar.
pub fn top_bar(ui: &mut Ui, state: &AppState, view: &DerivedView, config: &DashboardConfig) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(config.title.as_str());
        ui.separator();
        ui.label(
            RichText::new(format!(
                "{} penguins loaded, {} visible",
                state.dataset.len(),
                view.indices.len()
            ))
            .color(theme::TEXT_MUTED),
        );
    });
}
