use crate::data::model::Matrix;

use super::coverage::Coverage;

/// One row of a selection: the site picked at `order` and the totals after adding it.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionStep {
    /// 1-based position in the selection.
    pub order: usize,
    pub site: String,
    /// Species this site added to the preserved set.
    pub gain: usize,
    /// Preserved species after this step.
    pub cumulative: usize,
    /// `cumulative` as a percent of all species, unrounded.
    pub percent: f64,
}

/// Result of greedy selection: every site of the matrix, in pick order.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    pub steps: Vec<SelectionStep>,
}

impl Selection {
    /// Site names in pick order.
    pub fn site_order(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.site.as_str())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Greedy complementary selection engine.
///
/// Tie-break: among remaining sites with the greatest marginal gain, the one
/// earliest in header order wins. The same rule picks the seed (empty
/// preserved set, so gain equals richness) and the fallback once no site adds
/// anything (all gains zero, so the earliest remaining site).
pub struct GreedySelector<'a> {
    pub matrix: &'a Matrix,
}

impl<'a> GreedySelector<'a> {
    pub fn new(matrix: &'a Matrix) -> Self {
        Self { matrix }
    }

    /// Order every site of the matrix and report cumulative coverage.
    ///
    /// Algorithm:
    /// 1) Start with nothing preserved and every site remaining.
    /// 2) While sites remain:
    ///    - Pick the next site with [`pick_next`].
    ///    - Fold its species into the coverage.
    ///    - Emit a step with the new cumulative count and percent.
    pub fn run(&self) -> Selection {
        let n = self.matrix.site_count();
        let mut remaining = vec![true; n];
        let mut coverage = Coverage::new(self.matrix.species_count());
        let mut steps = Vec::with_capacity(n);

        while let Some((site, gain)) = pick_next(self.matrix, &remaining, &coverage) {
            remaining[site] = false;
            coverage = coverage.absorb(&self.matrix.site_species[site]);

            let step = SelectionStep {
                order: steps.len() + 1,
                site: self.matrix.site_names[site].clone(),
                gain,
                cumulative: coverage.count(),
                percent: coverage.percent(),
            };
            log::debug!(
                "step {}: `{}` adds {} species ({} preserved, {:.2}%)",
                step.order,
                step.site,
                step.gain,
                step.cumulative,
                step.percent
            );
            steps.push(step);
        }

        Selection { steps }
    }
}

/// Choose the next site among those still `remaining`.
///
/// Returns the header position of the chosen site and its marginal gain, or
/// `None` once every site has been taken. Only a strictly greater gain
/// displaces the current best, so ties go to the earliest header position.
pub fn pick_next(
    matrix: &Matrix,
    remaining: &[bool],
    coverage: &Coverage,
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for site in (0..matrix.site_count()).filter(|&i| remaining[i]) {
        let gain = coverage.gain(&matrix.site_species[site]);
        match best {
            Some((_, best_gain)) if best_gain >= gain => {}
            _ => best = Some((site, gain)),
        }
    }
    best
}
