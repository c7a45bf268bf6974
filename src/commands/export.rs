//! Export command: dump the loaded dataset.

use anyhow::Result;

use crate::dataset::Loader;
use crate::selector::{renderer, OutputFormat};

/// Options for the export command
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub format: OutputFormat,
}

/// Execute the export command
pub fn execute_export(options: ExportOptions, loader: &Loader) -> Result<()> {
    let dataset = loader.load()?;
    println!("{}", renderer::render_export(&dataset, options.format)?);
    Ok(())
}
