use crate::data::model::Matrix;
use crate::error::ValidationError;

use super::coverage::Coverage;
use super::greedy::Selection;

/// Cumulative coverage of the secondary group after one step of the primary order.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossStep {
    pub order: usize,
    pub site: String,
    pub cumulative: usize,
    pub percent: f64,
}

/// Reject a pair of matrices whose site names differ as sets.
///
/// Header order is irrelevant; only membership is compared.
pub fn ensure_same_sites(primary: &Matrix, secondary: &Matrix) -> Result<(), ValidationError> {
    let a = primary.site_set();
    let b = secondary.site_set();
    if a == b {
        return Ok(());
    }
    Err(ValidationError::SiteSetMismatch {
        primary: primary.source.clone(),
        secondary: secondary.source.clone(),
        only_primary: a.difference(&b).map(|s| s.to_string()).collect(),
        only_secondary: b.difference(&a).map(|s| s.to_string()).collect(),
    })
}

/// Measures a second organism group against a site order chosen for the first.
///
/// It never chooses sites itself; it replays the primary order and folds in
/// the secondary matrix's species at each step.
pub struct CrossEvaluator<'a> {
    pub primary_source: String,
    pub secondary: &'a Matrix,
}

impl<'a> CrossEvaluator<'a> {
    /// Pair a secondary matrix with the primary one, checking the site sets first.
    pub fn new(primary: &Matrix, secondary: &'a Matrix) -> Result<Self, ValidationError> {
        ensure_same_sites(primary, secondary)?;
        Ok(Self {
            primary_source: primary.source.clone(),
            secondary,
        })
    }

    /// Secondary coverage aligned 1:1 with `selection`.
    pub fn evaluate(&self, selection: &Selection) -> Result<Vec<CrossStep>, ValidationError> {
        let mut coverage = Coverage::new(self.secondary.species_count());
        let mut steps = Vec::with_capacity(selection.len());

        for step in &selection.steps {
            let species = self.secondary.species_at(&step.site).ok_or_else(|| {
                ValidationError::SiteSetMismatch {
                    primary: self.primary_source.clone(),
                    secondary: self.secondary.source.clone(),
                    only_primary: vec![step.site.clone()],
                    only_secondary: Vec::new(),
                }
            })?;
            coverage = coverage.absorb(species);
            steps.push(CrossStep {
                order: step.order,
                site: step.site.clone(),
                cumulative: coverage.count(),
                percent: coverage.percent(),
            });
        }

        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_str;
    use crate::selection::greedy::GreedySelector;
    use approx::assert_relative_eq;

    fn primary() -> Matrix {
        parse_str("plants.csv", ",A,B,C\nS1,1,0,0\nS2,1,1,0\nS3,0,1,1\n").unwrap()
    }

    #[test]
    fn test_replays_primary_order() {
        let p = primary();
        // Different header order, same site set.
        let text = ",C,A,B\nB1,1,0,0\nB2,1,0,1\nB3,0,1,0\nB4,1,0,0\n";
        let s = parse_str("birds.csv", text).unwrap();

        let sel = GreedySelector::new(&p).run();
        let cross = CrossEvaluator::new(&p, &s).unwrap().evaluate(&sel).unwrap();

        let sites: Vec<&str> = cross.iter().map(|c| c.site.as_str()).collect();
        assert_eq!(sites, sel.site_order().collect::<Vec<_>>());

        // A={B3} -> 1, B={B2} -> 2, C={B1,B2,B4} -> 4
        let counts: Vec<usize> = cross.iter().map(|c| c.cumulative).collect();
        assert_eq!(counts, vec![1, 2, 4]);
        assert_relative_eq!(cross[0].percent, 25.0);
        assert_relative_eq!(cross[1].percent, 50.0);
        assert_relative_eq!(cross[2].percent, 100.0);
        let orders: Vec<usize> = cross.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_mismatched_sites_rejected() {
        let p = primary();
        let s = parse_str("birds.csv", ",A,B,D\nB1,1,1,1\n").unwrap();

        let err = ensure_same_sites(&p, &s).unwrap_err();
        assert_eq!(
            err,
            ValidationError::SiteSetMismatch {
                primary: "plants.csv".into(),
                secondary: "birds.csv".into(),
                only_primary: vec!["C".into()],
                only_secondary: vec!["D".into()],
            }
        );
        assert!(CrossEvaluator::new(&p, &s).is_err());
    }

    #[test]
    fn test_subset_of_sites_rejected() {
        let p = primary();
        let s = parse_str("birds.csv", ",A,B\nB1,1,1\n").unwrap();
        assert!(matches!(
            ensure_same_sites(&p, &s),
            Err(ValidationError::SiteSetMismatch { ref only_secondary, .. }) if only_secondary.is_empty()
        ));
    }

    #[test]
    fn test_evaluate_rejects_unknown_site() {
        let p = primary();
        let s = parse_str("birds.csv", ",C,B,A\nB1,1,1,1\n").unwrap();
        let evaluator = CrossEvaluator::new(&p, &s).unwrap();

        let mut sel = GreedySelector::new(&p).run();
        sel.steps[1].site = "Q".into();
        assert!(evaluator.evaluate(&sel).is_err());
    }
}
