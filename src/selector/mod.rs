//! The selection engine: preference normalization, match scoring,
//! multi-dimension evaluation, and output rendering.

pub mod evaluate;
pub mod prefs;
pub mod renderer;
pub mod scoring;

pub use evaluate::{dimension_score, evaluate, level_score, total_weighted_score, Evaluation};
pub use prefs::{split_csv, OptionValue, Preferences};
pub use renderer::OutputFormat;
pub use scoring::{build_reasons, is_compact_bundle, match_score, recommend, Recommendation};
