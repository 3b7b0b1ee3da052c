use std::collections::BTreeSet;

/// Running union of the species preserved by the sites chosen so far.
///
/// Each step consumes the previous value and returns the next one, so a step
/// can be replayed or tested on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    preserved: BTreeSet<usize>,
    total: usize,
}

impl Coverage {
    /// Empty coverage over a universe of `total` species.
    pub fn new(total: usize) -> Self {
        Self {
            preserved: BTreeSet::new(),
            total,
        }
    }

    /// Species in `site` not yet preserved.
    pub fn gain(&self, site: &BTreeSet<usize>) -> usize {
        site.difference(&self.preserved).count()
    }

    /// Coverage after also preserving everything in `site`.
    pub fn absorb(mut self, site: &BTreeSet<usize>) -> Self {
        self.preserved.extend(site.iter().copied());
        self
    }

    pub fn count(&self) -> usize {
        self.preserved.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Percent of the species universe preserved, unrounded.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count() as f64 / self.total as f64 * 100.0
    }

    pub fn preserved(&self) -> &BTreeSet<usize> {
        &self.preserved
    }
}
