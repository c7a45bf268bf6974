//! Preference normalization.
//!
//! Raw option values arrive in four shapes: absent, a bare flag, a single
//! value, or repeated occurrences. [`OptionValue`] closes over those shapes
//! so call sites never inspect types ad hoc. Normalization never fails;
//! absent input yields empty values.

use serde::Serialize;

/// A raw CLI option value in one of its four possible shapes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionValue {
    #[default]
    Missing,
    /// Present with no value (`--flag`).
    Flag,
    Scalar(String),
    List(Vec<String>),
}

impl From<Option<String>> for OptionValue {
    fn from(value: Option<String>) -> Self {
        match value {
            None => OptionValue::Missing,
            Some(s) => OptionValue::Scalar(s),
        }
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        if values.is_empty() {
            OptionValue::Missing
        } else {
            OptionValue::List(values)
        }
    }
}

impl OptionValue {
    /// Single trimmed value; empty string when absent. For a repeated
    /// option the first occurrence wins.
    pub fn scalar(&self) -> String {
        match self {
            OptionValue::Missing | OptionValue::Flag => String::new(),
            OptionValue::Scalar(s) => s.trim().to_string(),
            OptionValue::List(values) => values
                .first()
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        }
    }

    /// Comma-split across all repetitions, trimmed, empty tokens dropped.
    pub fn list(&self) -> Vec<String> {
        match self {
            OptionValue::Missing | OptionValue::Flag => Vec::new(),
            OptionValue::Scalar(s) => split_csv(s),
            OptionValue::List(values) => values.iter().flat_map(|s| split_csv(s)).collect(),
        }
    }
}

/// Split a comma-list into trimmed, non-empty tokens.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// The normalized set of user-selected criteria driving a recommendation.
/// Empty strings mean the facet was not selected.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub framework: String,
    pub project_type: String,
    pub priorities: Vec<String>,
    pub design_style: String,
    pub team_size: String,
}

impl Preferences {
    pub fn from_options(
        framework: OptionValue,
        project_type: OptionValue,
        priorities: OptionValue,
        design_style: OptionValue,
        team_size: OptionValue,
    ) -> Self {
        Self {
            framework: framework.scalar(),
            project_type: project_type.scalar(),
            priorities: priorities.list(),
            design_style: design_style.scalar(),
            team_size: team_size.scalar(),
        }
    }

    /// True when no facet is selected; scoring cannot discriminate.
    pub fn is_empty(&self) -> bool {
        self.framework.is_empty()
            && self.project_type.is_empty()
            && self.priorities.is_empty()
            && self.design_style.is_empty()
            && self.team_size.is_empty()
    }
}
