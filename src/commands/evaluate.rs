//! Evaluate command: weighted multi-dimension scoring for named libraries.

use anyhow::Result;

use crate::dataset::Loader;
use crate::error::SelectorError;
use crate::selector::{evaluate, renderer, split_csv, OutputFormat};

/// Options for the evaluate command
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// Comma-separated library ids.
    pub libraries: Option<String>,
    /// Comma-separated dimension ids; empty means all.
    pub dimensions: Option<String>,
    pub format: OutputFormat,
}

/// Execute the evaluate command
pub fn execute_evaluate(options: EvaluateOptions, loader: &Loader) -> Result<()> {
    let library_ids = split_csv(options.libraries.as_deref().unwrap_or_default());
    if library_ids.is_empty() {
        return Err(SelectorError::Usage("evaluate requires --libraries".into()).into());
    }
    let dimension_ids = split_csv(options.dimensions.as_deref().unwrap_or_default());

    let dataset = loader.load()?;
    let (results, dimensions) = evaluate(&dataset, &library_ids, &dimension_ids);

    println!(
        "{}",
        renderer::render_evaluate(&dataset, &dimensions, &results, options.format)?
    );
    Ok(())
}
