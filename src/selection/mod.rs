//! Complementary reserve selection.
//!
//! - `greedy`: orders the sites of one matrix by marginal species gain.
//! - `cross`: replays that order against a second matrix over the same sites.
//! - `coverage`: the preserved-species accumulator both of them fold into.

pub mod coverage;
pub mod cross;
pub mod greedy;

pub use coverage::Coverage;
pub use cross::{CrossEvaluator, CrossStep, ensure_same_sites};
pub use greedy::{GreedySelector, Selection, SelectionStep, pick_next};
