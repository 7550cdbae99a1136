use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{Island, Penguin, PenguinDataset, Sex, Species};

/// The Palmer penguins table shipped inside the binary.
const BUNDLED_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the bundled penguins table.
pub fn load_bundled() -> Result<PenguinDataset> {
    load_csv_str(BUNDLED_CSV).context("parsing bundled penguins table")
}

/// Load a penguins table from a CSV file on disk.
pub fn load_csv_file(path: &Path) -> Result<PenguinDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    load_csv_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// CSV layout: header row, then one penguin per row.
///
/// Required columns: `species`, `island`, `bill_length_mm`, `bill_depth_mm`,
/// `body_mass_g`. Optional: `flipper_length_mm`, `sex`, `year`.
/// Missing values are written `NA` (or left empty).
pub fn load_csv_str(text: &str) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let required = |name: &str| column(name).with_context(|| format!("CSV missing '{name}' column"));

    let species_idx = required("species")?;
    let island_idx = required("island")?;
    let bill_length_idx = required("bill_length_mm")?;
    let bill_depth_idx = required("bill_depth_mm")?;
    let body_mass_idx = required("body_mass_g")?;
    let flipper_idx = column("flipper_length_mm");
    let sex_idx = column("sex");
    let year_idx = column("year");

    let mut penguins = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();
        let optional_cell = |idx: Option<usize>| idx.map(cell).filter(|s| !is_missing(s));

        let species = cell(species_idx)
            .parse::<Species>()
            .with_context(|| format!("CSV row {row_no}"))?;
        let island = cell(island_idx)
            .parse::<Island>()
            .with_context(|| format!("CSV row {row_no}"))?;

        let sex = match optional_cell(sex_idx) {
            Some(s) => Some(s.parse::<Sex>().with_context(|| format!("CSV row {row_no}"))?),
            None => None,
        };

        let year = match optional_cell(year_idx) {
            Some(s) => s
                .parse::<u16>()
                .with_context(|| format!("Row {row_no}, year: '{s}' is not a year"))?,
            None => 0,
        };

        penguins.push(Penguin {
            species,
            island,
            bill_length_mm: parse_measurement(cell(bill_length_idx), row_no, "bill_length_mm")?,
            bill_depth_mm: parse_measurement(cell(bill_depth_idx), row_no, "bill_depth_mm")?,
            flipper_length_mm: match flipper_idx {
                Some(idx) => parse_measurement(cell(idx), row_no, "flipper_length_mm")?,
                None => None,
            },
            body_mass_g: parse_measurement(cell(body_mass_idx), row_no, "body_mass_g")?,
            sex,
            year,
        });
    }

    let dataset = PenguinDataset::new(penguins);
    if dataset.is_empty() {
        bail!("CSV contains no rows");
    }
    Ok(dataset)
}

fn is_missing(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("NA")
}

fn parse_measurement(s: &str, row: usize, col: &str) -> Result<Option<f64>> {
    if is_missing(s) {
        return Ok(None);
    }
    let value = s
        .parse::<f64>()
        .with_context(|| format!("Row {row}, {col}: '{s}' is not a number"))?;
    if !value.is_finite() {
        bail!("Row {row}, {col}: '{s}' is not finite");
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year\n";

    #[test]
    fn bundled_table_has_expected_shape() {
        let ds = load_bundled().unwrap();
        assert_eq!(ds.len(), 344);
        assert_eq!(ds.species_count(Species::Adelie), 152);
        assert_eq!(ds.species_count(Species::Gentoo), 124);
        assert_eq!(ds.species_count(Species::Chinstrap), 68);
        assert_eq!(ds.min_body_mass(), Some(2700.0));

        let missing_mass = ds.penguins.iter().filter(|p| p.body_mass_g.is_none()).count();
        assert_eq!(missing_mass, 2);
    }

    #[test]
    fn first_row_is_parsed() {
        let ds = load_bundled().unwrap();
        let first = &ds.penguins[0];
        assert_eq!(first.species, Species::Adelie);
        assert_eq!(first.island, Island::Torgersen);
        assert_eq!(first.bill_length_mm, Some(39.1));
        assert_eq!(first.bill_depth_mm, Some(18.7));
        assert_eq!(first.flipper_length_mm, Some(181.0));
        assert_eq!(first.body_mass_g, Some(3750.0));
        assert_eq!(first.sex, Some(Sex::Male));
        assert_eq!(first.year, 2007);
    }

    #[test]
    fn na_cells_become_none() {
        let csv = format!("{HEADER}Gentoo,Biscoe,NA,NA,NA,NA,NA,2009\n");
        let ds = load_csv_str(&csv).unwrap();
        let p = &ds.penguins[0];
        assert_eq!(p.bill_length_mm, None);
        assert_eq!(p.body_mass_g, None);
        assert_eq!(p.sex, None);
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let csv = "species,island,bill_length_mm,bill_depth_mm,body_mass_g\n\
                   Chinstrap,Dream,46.5,17.9,3500\n";
        let ds = load_csv_str(csv).unwrap();
        assert_eq!(ds.penguins[0].flipper_length_mm, None);
        assert_eq!(ds.penguins[0].year, 0);
    }

    #[test]
    fn missing_required_column_fails() {
        let csv = "species,island,bill_length_mm,bill_depth_mm\nAdelie,Dream,39.0,18.0\n";
        let err = load_csv_str(csv).unwrap_err();
        assert!(format!("{err:#}").contains("body_mass_g"));
    }

    #[test]
    fn unknown_species_reports_row() {
        let csv = format!("{HEADER}Adelie,Dream,39.0,18.0,190,3500,male,2008\nEmperor,Dream,39.0,18.0,190,3500,male,2008\n");
        let err = load_csv_str(&csv).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("CSV row 1"), "{msg}");
        assert!(msg.contains("Emperor"), "{msg}");
    }

    #[test]
    fn malformed_number_fails() {
        let csv = format!("{HEADER}Adelie,Dream,thirty,18.0,190,3500,male,2008\n");
        assert!(load_csv_str(&csv).is_err());
    }

    #[test]
    fn empty_table_fails() {
        assert!(load_csv_str(HEADER).is_err());
    }

    #[test]
    fn missing_file_fails() {
        assert!(load_csv_file(Path::new("/nonexistent/penguins.csv")).is_err());
    }
}
