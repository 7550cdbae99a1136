use std::collections::BTreeSet;

use super::model::{Penguin, PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Filter predicate: species selection + body-mass upper bound
// ---------------------------------------------------------------------------

/// Lower bound of the mass slider, in grams.
pub const MASS_MIN: f64 = 2000.0;
/// Upper bound (and default) of the mass slider, in grams.
pub const MASS_MAX: f64 = 6000.0;

/// The sidebar controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Rows must weigh strictly less than this.
    pub mass_threshold: f64,
    /// Rows must belong to one of these species. Empty hides everything.
    pub selected_species: BTreeSet<Species>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            mass_threshold: MASS_MAX,
            selected_species: Species::ALL.into_iter().collect(),
        }
    }
}

impl FilterState {
    /// Whether a single penguin passes both predicates.
    ///
    /// A penguin with no recorded body mass never passes the mass bound.
    pub fn matches(&self, penguin: &Penguin) -> bool {
        self.selected_species.contains(&penguin.species)
            && penguin
                .body_mass_g
                .is_some_and(|mass| mass < self.mass_threshold)
    }
}

/// Return indices of penguins that pass the filter, in source order.
pub fn filtered_indices(dataset: &PenguinDataset, filter: &FilterState) -> Vec<usize> {
    if filter.selected_species.is_empty() {
        return Vec::new();
    }
    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p))
        .map(|(i, _)| i)
        .collect()
}
