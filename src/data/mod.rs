/// Data layer: core types, loading, filtering and summaries.
///
/// Architecture:
/// ```text
///  assets/penguins.csv (bundled)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PenguinDataset │  Vec<Penguin>, immutable
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  species + mass predicates → filtered indices
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │ summary   │   │  grid     │  per-column table filters
///   └──────────┘   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
pub mod grid;
pub mod summary;
