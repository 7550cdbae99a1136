use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Data-grid columns
// ---------------------------------------------------------------------------

/// The five columns shown in the data table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumn {
    Species,
    Island,
    BillLength,
    BillDepth,
    BodyMass,
}

impl GridColumn {
    pub const ALL: [GridColumn; 5] = [
        GridColumn::Species,
        GridColumn::Island,
        GridColumn::BillLength,
        GridColumn::BillDepth,
        GridColumn::BodyMass,
    ];

    pub fn header(self) -> &'static str {
        match self {
            GridColumn::Species => "species",
            GridColumn::Island => "island",
            GridColumn::BillLength => "bill_length_mm",
            GridColumn::BillDepth => "bill_depth_mm",
            GridColumn::BodyMass => "body_mass_g",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, GridColumn::Species | GridColumn::Island)
    }

    /// Numeric cell value, `None` for categorical columns or missing data.
    pub fn value(self, penguin: &Penguin) -> Option<f64> {
        match self {
            GridColumn::Species | GridColumn::Island => None,
            GridColumn::BillLength => penguin.bill_length_mm,
            GridColumn::BillDepth => penguin.bill_depth_mm,
            GridColumn::BodyMass => penguin.body_mass_g,
        }
    }

    /// Cell text as shown in the table. Missing values render as `NA`.
    pub fn cell_text(self, penguin: &Penguin) -> String {
        match self {
            GridColumn::Species => penguin.species.to_string(),
            GridColumn::Island => penguin.island.to_string(),
            _ => self
                .value(penguin)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "NA".to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-column filters
// ---------------------------------------------------------------------------

/// A filter typed into a column header. Inputs are kept as the raw text the
/// user entered; blank or unparseable bounds are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFilter {
    /// Case-insensitive substring match.
    Text(String),
    /// Inclusive numeric range.
    Range { min: String, max: String },
}

impl ColumnFilter {
    pub fn for_column(column: GridColumn) -> Self {
        if column.is_numeric() {
            ColumnFilter::Range {
                min: String::new(),
                max: String::new(),
            }
        } else {
            ColumnFilter::Text(String::new())
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            ColumnFilter::Text(query) => !query.trim().is_empty(),
            ColumnFilter::Range { min, max } => {
                parse_bound(min).is_some() || parse_bound(max).is_some()
            }
        }
    }

    pub fn clear(&mut self) {
        match self {
            ColumnFilter::Text(query) => query.clear(),
            ColumnFilter::Range { min, max } => {
                min.clear();
                max.clear();
            }
        }
    }

    pub fn accepts(&self, column: GridColumn, penguin: &Penguin) -> bool {
        match self {
            ColumnFilter::Text(query) => {
                let query = query.trim();
                query.is_empty()
                    || column
                        .cell_text(penguin)
                        .to_lowercase()
                        .contains(&query.to_lowercase())
            }
            ColumnFilter::Range { min, max } => {
                let (min, max) = (parse_bound(min), parse_bound(max));
                if min.is_none() && max.is_none() {
                    return true;
                }
                match column.value(penguin) {
                    Some(v) => min.map_or(true, |lo| v >= lo) && max.map_or(true, |hi| v <= hi),
                    None => false,
                }
            }
        }
    }
}

fn parse_bound(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Filters for every table column. They narrow the table only.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFilters {
    pub columns: Vec<(GridColumn, ColumnFilter)>,
}

impl Default for GridFilters {
    fn default() -> Self {
        Self {
            columns: GridColumn::ALL
                .into_iter()
                .map(|c| (c, ColumnFilter::for_column(c)))
                .collect(),
        }
    }
}

impl GridFilters {
    pub fn any_active(&self) -> bool {
        self.columns.iter().any(|(_, f)| f.is_active())
    }

    pub fn clear_all(&mut self) {
        for (_, f) in &mut self.columns {
            f.clear();
        }
    }

    /// Keep the indices whose rows pass every column filter, order preserved.
    pub fn apply(&self, dataset: &PenguinDataset, indices: &[usize]) -> Vec<usize> {
        indices
            .iter()
            .copied()
            .filter(|&i| {
                dataset.penguins.get(i).is_some_and(|p| {
                    self.columns.iter().all(|(col, f)| f.accepts(*col, p))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::tests::{penguin, small_dataset};
    use crate::data::model::Species;

    fn set(filters: &mut GridFilters, column: GridColumn, filter: ColumnFilter) {
        for (c, f) in &mut filters.columns {
            if *c == column {
                *f = filter.clone();
            }
        }
    }

    #[test]
    fn headers_match_source_columns() {
        let headers: Vec<&str> = GridColumn::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            ["species", "island", "bill_length_mm", "bill_depth_mm", "body_mass_g"]
        );
    }

    #[test]
    fn missing_values_render_as_na() {
        let p = penguin(Species::Adelie, None, (39.1, 18.7));
        assert_eq!(GridColumn::BodyMass.cell_text(&p), "NA");
        assert_eq!(GridColumn::BillLength.cell_text(&p), "39.1");
        assert_eq!(GridColumn::Species.cell_text(&p), "Adelie");
    }

    #[test]
    fn default_filters_keep_everything() {
        let ds = small_dataset();
        let filters = GridFilters::default();
        assert!(!filters.any_active());
        assert_eq!(filters.apply(&ds, &[0, 1, 2, 3]), vec![0, 1, 2, 3]);
    }

    #[test]
    fn text_filter_is_case_insensitive_substring() {
        let ds = small_dataset();
        let mut filters = GridFilters::default();
        set(&mut filters, GridColumn::Species, ColumnFilter::Text("gent".into()));
        assert!(filters.any_active());
        assert_eq!(filters.apply(&ds, &[0, 1, 2, 3]), vec![1, 3]);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let ds = small_dataset();
        let mut filters = GridFilters::default();
        set(
            &mut filters,
            GridColumn::BodyMass,
            ColumnFilter::Range {
                min: "3700".into(),
                max: "4800".into(),
            },
        );
        assert_eq!(filters.apply(&ds, &[0, 1, 2, 3]), vec![0, 3]);
    }

    #[test]
    fn unparseable_bounds_are_ignored() {
        let ds = small_dataset();
        let mut filters = GridFilters::default();
        set(
            &mut filters,
            GridColumn::BillDepth,
            ColumnFilter::Range {
                min: "abc".into(),
                max: " ".into(),
            },
        );
        assert!(!filters.any_active());
        assert_eq!(filters.apply(&ds, &[0, 2]), vec![0, 2]);
    }

    #[test]
    fn missing_value_fails_active_range() {
        let ds = PenguinDataset::new(vec![penguin(Species::Gentoo, None, (47.0, 15.0))]);
        let mut filters = GridFilters::default();
        set(
            &mut filters,
            GridColumn::BodyMass,
            ColumnFilter::Range {
                min: String::new(),
                max: "9000".into(),
            },
        );
        assert!(filters.apply(&ds, &[0]).is_empty());
    }

    #[test]
    fn clear_all_resets() {
        let mut filters = GridFilters::default();
        set(&mut filters, GridColumn::Island, ColumnFilter::Text("dream".into()));
        filters.clear_all();
        assert_eq!(filters, GridFilters::default());
    }
}
