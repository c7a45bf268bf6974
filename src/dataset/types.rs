//! Catalog data model.
//!
//! Wire names are camelCase to match both the primary TypeScript data file
//! and the JSON seed. Rating fields stay loose strings: the scorers map
//! unrecognized vocabulary to a neutral default instead of rejecting the
//! record at load time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One catalog entry describing a UI component library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    /// Supported frameworks ("react", "vue", "universal", ...).
    #[serde(default)]
    pub framework: Vec<String>,

    /// Design-style tags ("minimal", "material", ...).
    #[serde(default)]
    pub design_style: Vec<String>,

    /// Free-text size descriptor, e.g. "45KB gzipped" or "1.2MB".
    #[serde(default)]
    pub bundle_size: String,

    /// excellent | good | average | poor
    #[serde(default)]
    pub accessibility: String,

    /// high | medium | low
    #[serde(default)]
    pub customization: String,

    /// excellent | good | average | poor
    #[serde(default)]
    pub documentation: String,

    /// very-active | active | moderate | inactive
    #[serde(default)]
    pub community: String,

    #[serde(default)]
    pub typescript: bool,

    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default)]
    pub enterprise_ready: bool,

    #[serde(default)]
    pub github_stars: u64,

    /// easy | medium | hard
    #[serde(default)]
    pub learning_curve: String,
}

/// A project archetype with a shortlist of well-suited libraries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCase {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Membership test only; ids absent from the catalog are non-matches.
    #[serde(default)]
    pub recommended_libraries: Vec<String>,
}

/// A weighted scoring axis for multi-dimension evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Positive, relative weight; not required to sum to any total.
    #[serde(default)]
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTrend {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// Which data source the catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    /// Primary TypeScript data file.
    App,
    /// JSON seed fallback.
    Seed,
}

/// The loaded catalog: immutable for the lifetime of one invocation.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub libraries: Vec<Library>,
    pub dimensions: Vec<Dimension>,
    pub use_cases: Vec<UseCase>,
    pub design_trends: Vec<DesignTrend>,
    pub source: SourceTag,
}

impl Dataset {
    /// Index use cases by id for membership lookups.
    pub fn use_case_index(&self) -> HashMap<&str, &UseCase> {
        self.use_cases
            .iter()
            .map(|uc| (uc.id.as_str(), uc))
            .collect()
    }

    pub fn library(&self, id: &str) -> Option<&Library> {
        self.libraries.iter().find(|lib| lib.id == id)
    }
}
