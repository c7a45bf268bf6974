//! Catalog loading with primary/fallback source resolution.
//!
//! The primary source is the app's TypeScript data file; when it is absent
//! the loader falls back to a plain JSON seed. If neither exists the load
//! fails naming both attempted paths. The dataset is loaded fresh per
//! invocation and never written back.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::extract::find_array_literal;
use super::literal;
use super::types::{Dataset, SourceTag};
use crate::error::{Result, SelectorError};

/// Default location of the primary TypeScript data file.
pub const DEFAULT_DATA_FILE: &str = "app/src/data/uiLibraries.ts";

/// Default location of the JSON seed fallback.
pub const DEFAULT_SEED_FILE: &str = "data/uiLibraries.seed.json";

/// Resolves and loads the catalog from one of two fixed locations.
#[derive(Debug, Clone)]
pub struct Loader {
    pub data_file: PathBuf,
    pub seed_file: PathBuf,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            seed_file: PathBuf::from(DEFAULT_SEED_FILE),
        }
    }
}

impl Loader {
    pub fn new(data_file: PathBuf, seed_file: PathBuf) -> Self {
        Self {
            data_file,
            seed_file,
        }
    }

    /// Load the four collections from whichever source is available.
    pub fn load(&self) -> Result<Dataset> {
        if self.data_file.exists() {
            tracing::debug!(path = %self.data_file.display(), "loading primary data file");
            return self.load_primary();
        }

        if self.seed_file.exists() {
            tracing::debug!(path = %self.seed_file.display(), "loading seed fallback");
            return self.load_seed();
        }

        Err(SelectorError::DataUnavailable {
            primary: self.data_file.clone(),
            fallback: self.seed_file.clone(),
        })
    }

    fn load_primary(&self) -> Result<Dataset> {
        let source = read_to_string(&self.data_file)?;

        let libraries = extract_collection(&source, "uiLibraries")?;
        let dimensions = extract_collection(&source, "evaluationDimensions")?;
        let use_cases = extract_collection(&source, "useCases")?;
        let design_trends = extract_collection(&source, "designTrends")?;

        Ok(Dataset {
            libraries,
            dimensions,
            use_cases,
            design_trends,
            source: SourceTag::App,
        })
    }

    fn load_seed(&self) -> Result<Dataset> {
        let text = read_to_string(&self.seed_file)?;
        let payload: Value = serde_json::from_str(&text).map_err(|err| {
            SelectorError::Parse(format!(
                "invalid seed file {}: {err}",
                self.seed_file.display()
            ))
        })?;

        // Each seed key is optional and defaults to an empty collection.
        Ok(Dataset {
            libraries: seed_collection(&payload, "uiLibraries")?,
            dimensions: seed_collection(&payload, "evaluationDimensions")?,
            use_cases: seed_collection(&payload, "useCases")?,
            design_trends: seed_collection(&payload, "designTrends")?,
            source: SourceTag::Seed,
        })
    }
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SelectorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract a named exported array literal and deserialize it.
fn extract_collection<T: DeserializeOwned>(source: &str, name: &str) -> Result<Vec<T>> {
    let value = literal::parse(find_array_literal(source, name)?)?;
    serde_json::from_value(value)
        .map_err(|err| SelectorError::Parse(format!("malformed {name} entry: {err}")))
}

fn seed_collection<T: DeserializeOwned>(payload: &Value, key: &str) -> Result<Vec<T>> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|err| SelectorError::Parse(format!("malformed {key} entry: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const DATA_FILE: &str = r#"
export interface UiLibrary {
  id: string;
}

/**
 * Catalog used by the selector [reference].
 */
export const uiLibraries: UiLibrary[] = [
  {
    id: 'mantine',
    name: 'Mantine',
    category: 'component-kit',
    framework: ['react'],
    designStyle: ['modern'],
    bundleSize: '90KB', // core only
    accessibility: 'good',
    customization: 'high',
    documentation: 'excellent',
    community: 'very-active',
    typescript: true,
    darkMode: true,
    enterpriseReady: false,
    githubStars: 27000,
    learningCurve: 'easy',
  },
  {
    id: 'antd',
    name: 'Ant Design',
    framework: ['react'],
    enterpriseReady: true,
  },
];

export const evaluationDimensions = [
  { id: 'accessibility', name: 'Accessibility', weight: 3 },
  { id: 'performance', name: 'Performance', weight: 2 },
];

export const useCases = [
  { id: 'admin-dashboard', name: 'Admin dashboard', recommendedLibraries: ['antd'] },
];

export const designTrends = [
  { id: 'glassmorphism', name: 'Glassmorphism', description: 'Frosted layers' },
];
"#;

    fn loader_in(dir: &TempDir) -> Loader {
        Loader::new(
            dir.path().join("app/src/data/uiLibraries.ts"),
            dir.path().join("data/uiLibraries.seed.json"),
        )
    }

    #[test]
    fn loads_primary_when_present() {
        let dir = TempDir::new().unwrap();
        let loader = loader_in(&dir);
        fs::create_dir_all(loader.data_file.parent().unwrap()).unwrap();
        fs::write(&loader.data_file, DATA_FILE).unwrap();

        let dataset = loader.load().unwrap();
        assert_eq!(dataset.source, SourceTag::App);
        assert_eq!(dataset.libraries.len(), 2);
        assert_eq!(dataset.dimensions.len(), 2);
        assert_eq!(dataset.use_cases.len(), 1);
        assert_eq!(dataset.design_trends.len(), 1);

        let mantine = dataset.library("mantine").unwrap();
        assert_eq!(mantine.bundle_size, "90KB");
        assert!(mantine.typescript);
        assert_eq!(mantine.github_stars, 27000);
        // Sparse entry loads with defaults.
        let antd = dataset.library("antd").unwrap();
        assert!(antd.enterprise_ready);
        assert_eq!(antd.accessibility, "");
    }

    #[test]
    fn falls_back_to_seed() {
        let dir = TempDir::new().unwrap();
        let loader = loader_in(&dir);
        fs::create_dir_all(loader.seed_file.parent().unwrap()).unwrap();
        fs::write(
            &loader.seed_file,
            r#"{"uiLibraries": [{"id": "chakra"}], "useCases": []}"#,
        )
        .unwrap();

        let dataset = loader.load().unwrap();
        assert_eq!(dataset.source, SourceTag::Seed);
        assert_eq!(dataset.libraries.len(), 1);
        // Missing keys default to empty collections.
        assert!(dataset.dimensions.is_empty());
        assert!(dataset.design_trends.is_empty());
    }

    #[test]
    fn missing_both_sources_names_both_paths() {
        let dir = TempDir::new().unwrap();
        let loader = loader_in(&dir);

        let err = loader.load().unwrap_err();
        assert!(matches!(err, SelectorError::DataUnavailable { .. }));
        let message = err.to_string();
        assert!(message.contains("uiLibraries.ts"));
        assert!(message.contains("uiLibraries.seed.json"));
    }

    #[test]
    fn primary_missing_collection_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let loader = loader_in(&dir);
        fs::create_dir_all(loader.data_file.parent().unwrap()).unwrap();
        fs::write(&loader.data_file, "export const uiLibraries = [];").unwrap();

        let err = loader.load().unwrap_err();
        assert!(err
            .to_string()
            .contains("cannot find declaration for evaluationDimensions"));
    }
}
