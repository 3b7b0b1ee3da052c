use std::path::PathBuf;

use anyhow::Result;

use crate::data::loader::load_file;
use crate::report::Report;
use crate::selection::{CrossEvaluator, GreedySelector, ensure_same_sites};

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Matrix the sites are selected for.
    pub primary: PathBuf,
    /// Optional matrix measured against the primary order.
    pub secondary: Option<PathBuf>,
}

/// Load, validate, select, and cross-evaluate. Nothing is written here, so a
/// failure anywhere leaves no partial output behind.
pub fn run(config: &RunConfig) -> Result<Report> {
    let primary = load_file(&config.primary)?;
    let secondary = config.secondary.as_deref().map(load_file).transpose()?;

    if let Some(sec) = &secondary {
        ensure_same_sites(&primary, sec)?;
    }

    let selection = GreedySelector::new(&primary).run();
    if let Some(last) = selection.steps.last() {
        log::info!(
            "Selected {} sites; {} of {} species preserved",
            selection.len(),
            last.cumulative,
            primary.species_count()
        );
    }

    match &secondary {
        Some(sec) => {
            let cross = CrossEvaluator::new(&primary, sec)?.evaluate(&selection)?;
            Report::with_secondary(&primary.source, &selection, &sec.source, &cross)
        }
        None => Ok(Report::primary_only(&primary.source, &selection)),
    }
}
