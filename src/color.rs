use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            // Start at 210° so the first species lands on blue.
            let hue = 210.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps each species to a fixed colour, shared by the plot and the sidebar.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Species, Color32>,
    default_color: Color32,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new(&Species::ALL)
    }
}

impl ColorMap {
    /// Build a colour map assigning palette entries in the given order.
    pub fn new(species: &[Species]) -> Self {
        let mapping = species
            .iter()
            .copied()
            .zip(generate_palette(species.len()))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .get(&species)
            .copied()
            .unwrap_or(self.default_color)
    }
}

/// Parse a `#rrggbb` string; anything else yields `None`.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(3).len(), 3);
    }

    #[test]
    fn species_get_distinct_colors() {
        let cm = ColorMap::default();
        let a = cm.color_for(Species::Adelie);
        let g = cm.color_for(Species::Gentoo);
        let c = cm.color_for(Species::Chinstrap);
        assert_ne!(a, g);
        assert_ne!(g, c);
        assert_ne!(a, c);
    }

    #[test]
    fn unmapped_species_is_gray() {
        let cm = ColorMap::new(&[Species::Adelie]);
        assert_eq!(cm.color_for(Species::Gentoo), Color32::GRAY);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex("#EA39B7"), Some(Color32::from_rgb(0xEA, 0x39, 0xB7)));
        assert_eq!(parse_hex("#45d9e8"), Some(Color32::from_rgb(0x45, 0xD9, 0xE8)));
        assert_eq!(parse_hex("EA39B7"), None);
        assert_eq!(parse_hex("#EA39"), None);
        assert_eq!(parse_hex("#GG0000"), None);
    }
}
