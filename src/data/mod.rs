/// Data layer: the validated matrix, its loader, and synthetic inputs.
///
/// Architecture:
/// ```text
///   site-by-species .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split, normalise, validate → Matrix
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Matrix   │  species, sites in header order, site → species
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod sample;
