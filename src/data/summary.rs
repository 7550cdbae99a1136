use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Value-box statistics over the filtered view
// ---------------------------------------------------------------------------

/// Count and mean bill measurements of the visible penguins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    /// `None` when no visible penguin has a bill length.
    pub mean_bill_length_mm: Option<f64>,
    pub mean_bill_depth_mm: Option<f64>,
}

impl Summary {
    pub fn compute(dataset: &PenguinDataset, indices: &[usize]) -> Self {
        let rows = || indices.iter().filter_map(|&i| dataset.penguins.get(i));
        Self {
            count: indices.len(),
            mean_bill_length_mm: mean(rows().map(|p: &Penguin| p.bill_length_mm)),
            mean_bill_depth_mm: mean(rows().map(|p: &Penguin| p.bill_depth_mm)),
        }
    }
}

/// Arithmetic mean of the present values; missing ones are skipped.
pub fn mean(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, n) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Render a length with one decimal and a unit, e.g. `43.8 mm`.
/// An undefined mean renders as `NaN mm`.
pub fn format_mm(value: Option<f64>) -> String {
    format!("{:.1} mm", value.unwrap_or(f64::NAN))
}
