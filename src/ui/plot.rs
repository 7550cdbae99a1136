use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::data::model::{PenguinDataset, Species};
use crate::state::{AppState, DerivedView};

// ---------------------------------------------------------------------------
// Bill length vs depth scatter plot
// ---------------------------------------------------------------------------

/// `[bill_length, bill_depth]` for the visible penguins of one species.
/// Rows missing either measurement are skipped.
pub fn species_points(dataset: &PenguinDataset, indices: &[usize], species: Species) -> Vec<[f64; 2]> {
    indices
        .iter()
        .filter_map(|&i| dataset.penguins.get(i))
        .filter(|p| p.species == species)
        .filter_map(|p| Some([p.bill_length_mm?, p.bill_depth_mm?]))
        .collect()
}

/// Render the scatter plot, one series per species so the legend doubles as
/// the hue key.
pub fn scatter_plot(ui: &mut Ui, state: &AppState, view: &DerivedView) {
    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label("bill_length_mm")
        .y_axis_label("bill_depth_mm")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for species in Species::ALL {
                let points = species_points(&state.dataset, &view.indices, species);
                if points.is_empty() {
                    continue;
                }
                let series = Points::new(PlotPoints::from(points))
                    .name(species.label())
                    .color(state.color_map.color_for(species))
                    .radius(3.0);
                plot_ui.points(series);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::tests::{penguin, small_dataset};

    #[test]
    fn one_point_per_visible_row_of_species() {
        let ds = small_dataset();
        let pts = species_points(&ds, &[0, 1, 2, 3], Species::Gentoo);
        assert_eq!(pts, vec![[47.0, 15.0], [45.0, 14.0]]);
        assert!(species_points(&ds, &[0, 2], Species::Gentoo).is_empty());
    }

    #[test]
    fn rows_without_bill_measurements_are_skipped() {
        let mut p = penguin(Species::Adelie, Some(3500.0), (39.0, 18.0));
        p.bill_depth_mm = None;
        let ds = PenguinDataset::new(vec![p]);
        assert!(species_points(&ds, &[0], Species::Adelie).is_empty());
    }
}
