//! Compare command: side-by-side attribute listing for named libraries.

use anyhow::Result;

use crate::dataset::{Library, Loader};
use crate::error::SelectorError;
use crate::selector::{renderer, split_csv, OutputFormat};

/// Options for the compare command
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Comma-separated library ids.
    pub libraries: Option<String>,
    pub format: OutputFormat,
}

/// Execute the compare command
pub fn execute_compare(options: CompareOptions, loader: &Loader) -> Result<()> {
    let library_ids = split_csv(options.libraries.as_deref().unwrap_or_default());
    if library_ids.is_empty() {
        return Err(SelectorError::Usage("compare requires --libraries".into()).into());
    }

    let dataset = loader.load()?;
    let selected = select_libraries(&dataset, &library_ids);

    println!(
        "{}",
        renderer::render_compare(&dataset, &selected, options.format)?
    );
    Ok(())
}

/// Catalog entries matching the requested ids, in catalog order. Ids absent
/// from the catalog are skipped, not errors.
pub fn select_libraries(dataset: &crate::dataset::Dataset, ids: &[String]) -> Vec<Library> {
    let selected: Vec<Library> = dataset
        .libraries
        .iter()
        .filter(|lib| ids.iter().any(|id| *id == lib.id))
        .cloned()
        .collect();
    for id in ids {
        if !selected.iter().any(|lib| lib.id == *id) {
            tracing::warn!("unknown library id in --libraries: {}", id);
        }
    }
    selected
}
