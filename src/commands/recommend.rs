//! Recommend command: rank the catalog against user preferences.

use anyhow::Result;

use crate::dataset::Loader;
use crate::error::SelectorError;
use crate::selector::{recommend, renderer, OptionValue, OutputFormat, Preferences};

/// Options for the recommend command
#[derive(Debug, Clone, Default)]
pub struct RecommendOptions {
    pub framework: Option<String>,
    pub project_type: Option<String>,
    pub priorities: Vec<String>,
    pub design_style: Option<String>,
    pub team_size: Option<String>,
    pub top: usize,
    pub format: OutputFormat,
}

/// Execute the recommend command
pub fn execute_recommend(options: RecommendOptions, loader: &Loader) -> Result<()> {
    let prefs = Preferences::from_options(
        OptionValue::from(options.framework),
        OptionValue::from(options.project_type),
        OptionValue::from(options.priorities),
        OptionValue::from(options.design_style),
        OptionValue::from(options.team_size),
    );

    if prefs.framework.is_empty() || prefs.project_type.is_empty() {
        return Err(SelectorError::Usage(
            "recommend requires --framework and --project-type".into(),
        )
        .into());
    }

    let dataset = loader.load()?;
    let results = recommend(&dataset, &prefs, options.top);
    tracing::debug!(results = results.len(), "ranked recommendations");

    println!(
        "{}",
        renderer::render_recommend(&dataset, &prefs, &results, options.format)?
    );
    Ok(())
}
