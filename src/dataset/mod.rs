//! Catalog data: model, extraction, and loading.

pub mod extract;
pub mod literal;
pub mod loader;
pub mod types;

pub use loader::{Loader, DEFAULT_DATA_FILE, DEFAULT_SEED_FILE};
pub use types::{Dataset, DesignTrend, Dimension, Library, SourceTag, UseCase};
