//! # Classroom Climate Core Library
//!
//! Recommends classroom environment settings for a season and time of day,
//! and checks the current settings against those recommendations. The CLI
//! binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Recommendation evaluator**: a fixed `season x time -> attribute -> range`
//!   table with pure preset and evaluation operations
//! - **Advisory text**: static tips per season and per time of day
//! - **Feedback**: student-facing sentences for evaluation results
//! - **Panel**: the selection/controls/feedback state a front end renders
//! - **Storage**: TOML-based configuration of the panel's starting state
//!
//! ## Key Components
//!
//! - [`compute_preset`] / [`evaluate`]: the evaluator operations
//! - [`ClassroomPanel`]: panel state machine for a front end
//! - [`Config`]: application configuration

pub mod advisory;
pub mod climate;
pub mod error;
pub mod feedback;
pub mod panel;
pub mod recommendation;
pub mod storage;

pub use advisory::advisory_text;
pub use climate::{Attribute, AttributeMap, Season, TimeOfDay};
pub use error::{ConfigError, CoreError, Result};
pub use feedback::{FeedbackItem, FeedbackReport};
pub use panel::{ClassroomPanel, Feedback};
pub use recommendation::{
    compute_preset, evaluate, lookup, CurrentSettings, Direction, EvalResult, Evaluation, Preset,
    Range, RangeSet,
};
pub use storage::Config;
