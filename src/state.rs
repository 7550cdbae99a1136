use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{FilterState, filtered_indices};
use crate::data::grid::GridFilters;
use crate::data::model::{PenguinDataset, Species};
use crate::data::summary::Summary;

// ---------------------------------------------------------------------------
// Derived view
// ---------------------------------------------------------------------------

/// The filtered rows and their summary for one filter version.
/// Cloning is cheap; the indices are shared.
#[derive(Debug, Clone)]
pub struct DerivedView {
    /// Filter version this view was computed for.
    pub version: u64,
    /// Indices into the dataset, in source order.
    pub indices: Arc<[usize]>,
    pub summary: Summary,
}

impl DerivedView {
    fn compute(dataset: &PenguinDataset, filters: &FilterState, version: u64) -> Self {
        let indices = filtered_indices(dataset, filters);
        let summary = Summary::compute(dataset, &indices);
        Self {
            version,
            indices: indices.into(),
            summary,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, read-only for the whole session.
    pub dataset: Arc<PenguinDataset>,

    /// Sidebar controls. Only mutated through the setters below so the
    /// version stays in step.
    filters: FilterState,

    /// Bumped on every effective filter change.
    version: u64,

    /// Cached view for `version`, refreshed lazily by [`AppState::view`].
    view: DerivedView,

    /// How many times the view has been computed.
    recomputations: u64,

    /// Slider range for the mass threshold.
    pub mass_bounds: RangeInclusive<f64>,

    /// Species colours shared by the plot and sidebar.
    pub color_map: ColorMap,

    /// Column filters typed into the data table.
    pub grid_filters: GridFilters,
}

impl AppState {
    pub fn new(dataset: Arc<PenguinDataset>, config: &DashboardConfig) -> Self {
        let filters = FilterState {
            mass_threshold: config.initial_mass(),
            ..FilterState::default()
        };
        let view = DerivedView::compute(&dataset, &filters, 0);
        Self {
            dataset,
            filters,
            version: 0,
            view,
            recomputations: 1,
            mass_bounds: config.mass_min..=config.mass_max,
            color_map: ColorMap::default(),
            grid_filters: GridFilters::default(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[cfg(test)]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// The derived view for the current filters. Recomputed only when the
    /// filters changed since the last call.
    pub fn view(&mut self) -> DerivedView {
        if self.view.version != self.version {
            self.view = DerivedView::compute(&self.dataset, &self.filters, self.version);
            self.recomputations += 1;
            log::trace!(
                "recomputed view v{} (#{}): {} of {} rows",
                self.version,
                self.recomputations,
                self.view.indices.len(),
                self.dataset.len()
            );
        }
        self.view.clone()
    }

    fn bump(&mut self) {
        self.version += 1;
        log::debug!(
            "filters v{}: mass < {} g, species {:?}",
            self.version,
            self.filters.mass_threshold,
            self.filters.selected_species
        );
    }

    /// Move the mass slider. Values are clamped into `mass_bounds`.
    pub fn set_mass_threshold(&mut self, mass: f64) {
        if mass.is_nan() {
            return;
        }
        let mass = mass.clamp(*self.mass_bounds.start(), *self.mass_bounds.end());
        if mass != self.filters.mass_threshold {
            self.filters.mass_threshold = mass;
            self.bump();
        }
    }

    /// Check or uncheck one species.
    pub fn set_species_selected(&mut self, species: Species, selected: bool) {
        let changed = if selected {
            self.filters.selected_species.insert(species)
        } else {
            self.filters.selected_species.remove(&species)
        };
        if changed {
            self.bump();
        }
    }

    pub fn toggle_species(&mut self, species: Species) {
        let selected = self.filters.selected_species.contains(&species);
        self.set_species_selected(species, !selected);
    }

    pub fn select_all_species(&mut self) {
        for species in Species::ALL {
            self.set_species_selected(species, true);
        }
    }

    pub fn select_no_species(&mut self) {
        for species in Species::ALL {
            self.set_species_selected(species, false);
        }
    }

    /// Back to the startup filters: full mass range, every species.
    pub fn reset_filters(&mut self) {
        self.set_mass_threshold(*self.mass_bounds.end());
        self.select_all_species();
        self.grid_filters.clear_all();
    }
}
