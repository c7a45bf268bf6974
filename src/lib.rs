#![forbid(unsafe_code)]

//! # uiselect
//!
//! Decision support for choosing a UI component library: score a catalog
//! of libraries against project preferences, evaluate them on weighted
//! dimensions, or compare them side by side.
//!
//! ## Example
//!
//! ```rust,no_run
//! use uiselect::dataset::Loader;
//! use uiselect::selector::{recommend, OptionValue, Preferences};
//!
//! fn main() -> anyhow::Result<()> {
//!     let dataset = Loader::default().load()?;
//!     let prefs = Preferences::from_options(
//!         OptionValue::Scalar("react".into()),
//!         OptionValue::Scalar("admin-dashboard".into()),
//!         OptionValue::Scalar("performance,dx".into()),
//!         OptionValue::Missing,
//!         OptionValue::Missing,
//!     );
//!     for entry in recommend(&dataset, &prefs, 5) {
//!         println!("{}: {:.1}", entry.library.name, entry.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod dataset;
pub mod error;
pub mod selector;

// Re-exports
pub use dataset::{Dataset, DesignTrend, Dimension, Library, Loader, SourceTag, UseCase};
pub use error::{Result, SelectorError};
pub use selector::{
    evaluate, match_score, recommend, Evaluation, OptionValue, OutputFormat, Preferences,
    Recommendation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
