//! Complementary reserve selection.
//!
//! - Input: a comma-separated site-by-species presence/absence matrix, and
//!   optionally a second one over the same sites for another organism group.
//! - Selection: greedy, starting from the richest site and then always adding
//!   the site that contributes the most species not yet preserved.
//! - Output: the ordered sites with cumulative species counts and percent of
//!   total diversity, for the primary group and, optionally, the secondary.
//!
//! Every input is validated in full before any selection runs; a single bad
//! cell rejects the file.

pub mod data;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod selection;

pub use data::loader::{load_file, parse_lines, parse_str};
pub use data::model::Matrix;
pub use error::ValidationError;
pub use pipeline::{RunConfig, run};
pub use report::{Report, ReportRow};
pub use selection::{CrossEvaluator, CrossStep, GreedySelector, Selection, SelectionStep};
