use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Categorical labels
// ---------------------------------------------------------------------------

/// A categorical cell that did not match any known label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label '{value}'")]
pub struct LabelError {
    pub kind: &'static str,
    pub value: String,
}

impl LabelError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Penguin species. Ordered so it can live in a `BTreeSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    /// All species in the order the checkbox group lists them.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn label(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Adelie" => Ok(Species::Adelie),
            "Chinstrap" => Ok(Species::Chinstrap),
            "Gentoo" => Ok(Species::Gentoo),
            other => Err(LabelError::new("species", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
}

impl Island {
    pub fn label(self) -> &'static str {
        match self {
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
            Island::Torgersen => "Torgersen",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Island {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Biscoe" => Ok(Island::Biscoe),
            "Dream" => Ok(Island::Dream),
            "Torgersen" => Ok(Island::Torgersen),
            other => Err(LabelError::new("island", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => f.write_str("female"),
            Sex::Male => f.write_str("male"),
        }
    }
}

impl FromStr for Sex {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            other => Err(LabelError::new("sex", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the table
// ---------------------------------------------------------------------------

/// A single observed penguin. Measurements are `None` where the source
/// table says `NA`.
#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub species: Species,
    pub island: Island,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<Sex>,
    pub year: u16,
}

impl Penguin {
    /// Flipper length, sex and year, for the table row tooltip.
    pub fn details(&self) -> String {
        let flipper = self
            .flipper_length_mm
            .map(|v| format!("{v} mm"))
            .unwrap_or_else(|| "NA".to_string());
        let sex = self
            .sex
            .map(|s| s.to_string())
            .unwrap_or_else(|| "NA".to_string());
        format!("flipper {flipper}, {sex}, {}", self.year)
    }
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table, in source order. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct PenguinDataset {
    pub penguins: Vec<Penguin>,
}

impl PenguinDataset {
    pub fn new(penguins: Vec<Penguin>) -> Self {
        Self { penguins }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }

    /// Smallest known body mass, if any row has one.
    pub fn min_body_mass(&self) -> Option<f64> {
        self.penguins
            .iter()
            .filter_map(|p| p.body_mass_g)
            .min_by(f64::total_cmp)
    }

    /// Number of rows per species.
    pub fn species_count(&self, species: Species) -> usize {
        self.penguins.iter().filter(|p| p.species == species).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_labels_parse_back() {
        for sp in Species::ALL {
            assert_eq!(sp.label().parse::<Species>(), Ok(sp));
        }
    }

    #[test]
    fn unknown_label_is_reported() {
        let err = "Emperor".parse::<Species>().unwrap_err();
        assert_eq!(err.kind, "species");
        assert_eq!(err.to_string(), "unknown species label 'Emperor'");
        assert!("Atlantis".parse::<Island>().is_err());
        assert!("MALE".parse::<Sex>().is_err());
    }

    #[test]
    fn checkbox_order_is_adelie_gentoo_chinstrap() {
        let labels: Vec<&str> = Species::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Adelie", "Gentoo", "Chinstrap"]);
    }

    #[test]
    fn min_body_mass_skips_missing() {
        let base = Penguin {
            species: Species::Adelie,
            island: Island::Dream,
            bill_length_mm: None,
            bill_depth_mm: None,
            flipper_length_mm: None,
            body_mass_g: None,
            sex: None,
            year: 2007,
        };
        let ds = PenguinDataset::new(vec![
            base.clone(),
            Penguin {
                body_mass_g: Some(3100.0),
                ..base.clone()
            },
            Penguin {
                body_mass_g: Some(2950.0),
                ..base
            },
        ]);
        assert_eq!(ds.min_body_mass(), Some(2950.0));
        assert_eq!(ds.penguins[0].details(), "flipper NA, NA, 2007");
        assert_eq!(PenguinDataset::default().min_body_mass(), None);
    }
}
