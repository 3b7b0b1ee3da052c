use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Matrix – one validated site-by-species table
// ---------------------------------------------------------------------------

/// A validated presence/absence matrix.
///
/// Species are stored once, in row order, and referred to by index everywhere
/// else. Sites keep header order, which is also the tie-break order used by
/// the selector.
#[derive(Debug, Clone)]
pub struct Matrix {
    /// Identifier the matrix was loaded under (file path or test label).
    pub source: String,
    /// Species names in row order.
    pub species: Vec<String>,
    /// Site names in header order.
    pub site_names: Vec<String>,
    /// For each site (parallel to `site_names`) the indices of present species.
    pub site_species: Vec<BTreeSet<usize>>,
    /// For each site (parallel to `site_names`) the number of present species.
    pub richness: Vec<usize>,
    /// site name → position in `site_names`.
    site_index: BTreeMap<String, usize>,
}

impl Matrix {
    /// Assemble a matrix from already-validated parts.
    pub(crate) fn from_parts(
        source: String,
        species: Vec<String>,
        site_names: Vec<String>,
        site_species: Vec<BTreeSet<usize>>,
    ) -> Self {
        let richness = site_species.iter().map(BTreeSet::len).collect();
        let site_index = site_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Matrix {
            source,
            species,
            site_names,
            site_species,
            richness,
            site_index,
        }
    }

    /// Number of species (rows).
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Number of sites (columns after the first).
    pub fn site_count(&self) -> usize {
        self.site_names.len()
    }

    /// Header position of a site, by name.
    pub fn site_position(&self, name: &str) -> Option<usize> {
        self.site_index.get(name).copied()
    }

    /// Species present at a site, by name.
    pub fn species_at(&self, name: &str) -> Option<&BTreeSet<usize>> {
        self.site_position(name).map(|i| &self.site_species[i])
    }

    /// Site names as a sorted set, for comparing the site universe of two matrices.
    pub fn site_set(&self) -> BTreeSet<&str> {
        self.site_index.keys().map(String::as_str).collect()
    }
}
