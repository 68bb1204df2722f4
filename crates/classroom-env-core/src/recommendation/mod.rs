//! Recommendation evaluator.
//!
//! Owns the fixed `season x time of day -> attribute -> range` table and the
//! two pure operations over it: preset computation and range evaluation.
//! Every call depends only on its arguments.

mod evaluator;
mod settings;
mod table;

pub use evaluator::{
    classify, compute_preset, evaluate, lookup, Direction, EvalResult, Evaluation, Preset,
};
pub use settings::CurrentSettings;
pub use table::{round_to_tenth, Range, RangeSet, RECOMMENDATIONS};
