//! Output rendering for ranked, evaluated, and compared results.
//!
//! Pure formatting: scores are never recomputed here. JSON output is a
//! single pretty document; markdown is a header plus one section per entry.

use serde::Serialize;

use super::evaluate::Evaluation;
use super::prefs::Preferences;
use super::scoring::Recommendation;
use crate::dataset::{Dataset, Dimension, Library};
use crate::error::{Result, SelectorError};

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(alias = "md")]
    Markdown,
    Json,
}

pub fn render_recommend(
    dataset: &Dataset,
    prefs: &Preferences,
    results: &[Recommendation],
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct Payload<'a> {
            source: crate::dataset::SourceTag,
            prefs: &'a Preferences,
            results: &'a [Recommendation],
        }
        return to_pretty(&Payload {
            source: dataset.source,
            prefs,
            results,
        });
    }

    let mut lines = vec!["# UI library recommendations".to_string(), String::new()];
    for (idx, item) in results.iter().enumerate() {
        let lib = &item.library;
        lines.push(format!(
            "## {}. {} ({:.1} pts)",
            idx + 1,
            lib.name,
            item.score
        ));
        lines.push(format!("- Category: {}", lib.category));
        lines.push(format!("- Frameworks: {}", lib.framework.join(", ")));
        lines.push(format!("- Stars: {}", group_thousands(lib.github_stars)));
        lines.push(format!("- Bundle size: {}", lib.bundle_size));
        if !item.reasons.is_empty() {
            lines.push(format!("- Why: {}", item.reasons.join(" / ")));
        }
        lines.push(String::new());
    }
    Ok(lines.join("\n"))
}

pub fn render_evaluate(
    dataset: &Dataset,
    dimensions: &[Dimension],
    results: &[Evaluation],
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct Payload<'a> {
            source: crate::dataset::SourceTag,
            dimensions: &'a [Dimension],
            result: &'a [Evaluation],
        }
        return to_pretty(&Payload {
            source: dataset.source,
            dimensions,
            result: results,
        });
    }

    let mut lines = vec!["# UI library evaluation".to_string(), String::new()];
    let ids: Vec<&str> = dimensions.iter().map(|d| d.id.as_str()).collect();
    lines.push(format!("- Dimensions: {}", ids.join(", ")));
    lines.push(String::new());
    for (idx, entry) in results.iter().enumerate() {
        lines.push(format!(
            "## {}. {} ({:.1}/100)",
            idx + 1,
            entry.library.name,
            entry.total_score
        ));
        for dim in dimensions {
            let score = entry.scores.get(&dim.id).copied().unwrap_or_default();
            lines.push(format!("- {}: {}/5", dim.name, score));
        }
        lines.push(String::new());
    }
    Ok(lines.join("\n"))
}

pub fn render_compare(
    dataset: &Dataset,
    libraries: &[Library],
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct Payload<'a> {
            source: crate::dataset::SourceTag,
            result: &'a [Library],
        }
        return to_pretty(&Payload {
            source: dataset.source,
            result: libraries,
        });
    }

    let mut lines = vec!["# UI library comparison".to_string(), String::new()];
    for lib in libraries {
        lines.push(format!("## {}", lib.name));
        lines.push(format!("- category: {}", lib.category));
        lines.push(format!("- framework: {}", lib.framework.join(", ")));
        lines.push(format!("- accessibility: {}", lib.accessibility));
        lines.push(format!("- customization: {}", lib.customization));
        lines.push(format!("- bundleSize: {}", lib.bundle_size));
        lines.push(format!("- typescript: {}", lib.typescript));
        lines.push(format!("- enterpriseReady: {}", lib.enterprise_ready));
        lines.push(format!("- githubStars: {}", lib.github_stars));
        lines.push(String::new());
    }
    Ok(lines.join("\n"))
}

pub fn render_export(dataset: &Dataset, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Payload<'a> {
            source: crate::dataset::SourceTag,
            ui_libraries: &'a [Library],
            evaluation_dimensions: &'a [Dimension],
            use_cases: &'a [crate::dataset::UseCase],
            design_trends: &'a [crate::dataset::DesignTrend],
        }
        return to_pretty(&Payload {
            source: dataset.source,
            ui_libraries: &dataset.libraries,
            evaluation_dimensions: &dataset.dimensions,
            use_cases: &dataset.use_cases,
            design_trends: &dataset.design_trends,
        });
    }

    let lines = vec![
        "# UI selector dataset".to_string(),
        String::new(),
        format!("- uiLibraries: {}", dataset.libraries.len()),
        format!("- evaluationDimensions: {}", dataset.dimensions.len()),
        format!("- useCases: {}", dataset.use_cases.len()),
        format!("- designTrends: {}", dataset.design_trends.len()),
    ];
    Ok(lines.join("\n"))
}

fn to_pretty<T: Serialize>(payload: &T) -> Result<String> {
    serde_json::to_string_pretty(payload)
        .map_err(|err| SelectorError::Parse(format!("failed to serialize output: {err}")))
}

/// 27456 -> "27,456".
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SourceTag;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn lib(id: &str) -> Library {
        Library {
            id: id.into(),
            name: id.to_uppercase(),
            category: "component-kit".into(),
            framework: vec!["react".into(), "vue".into()],
            design_style: vec![],
            bundle_size: "45KB".into(),
            accessibility: "good".into(),
            customization: "high".into(),
            documentation: "good".into(),
            community: "active".into(),
            typescript: true,
            dark_mode: false,
            enterprise_ready: false,
            github_stars: 27456,
            learning_curve: "easy".into(),
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            libraries: vec![lib("a"), lib("b")],
            dimensions: vec![Dimension {
                id: "performance".into(),
                name: "Performance".into(),
                weight: 2.0,
            }],
            use_cases: vec![],
            design_trends: vec![],
            source: SourceTag::Seed,
        }
    }

    #[test]
    fn output_format_parses_value_and_alias() {
        use clap::ValueEnum;
        let parse = |s| OutputFormat::from_str(s, true);
        assert_eq!(parse("markdown").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse("JSON").unwrap(), OutputFormat::Json);
        assert!(parse("yaml").is_err());
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(27456), "27,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn markdown_recommend_lists_reasons() {
        let ds = dataset();
        let results = vec![Recommendation {
            library: lib("a"),
            score: 66.66666666666667,
            reasons: vec!["Compact bundle size", "Built-in dark mode"],
        }];
        let out =
            render_recommend(&ds, &Preferences::default(), &results, OutputFormat::Markdown)
                .unwrap();
        assert!(out.starts_with("# UI library recommendations"));
        assert!(out.contains("## 1. A (66.7 pts)"));
        assert!(out.contains("- Stars: 27,456"));
        assert!(out.contains("- Why: Compact bundle size / Built-in dark mode"));
    }

    #[test]
    fn json_recommend_carries_source_prefs_and_scores() {
        let ds = dataset();
        let results = vec![Recommendation {
            library: lib("a"),
            score: 50.0,
            reasons: vec![],
        }];
        let prefs = Preferences {
            framework: "react".into(),
            ..Default::default()
        };
        let out = render_recommend(&ds, &prefs, &results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "seed");
        assert_eq!(value["prefs"]["framework"], "react");
        assert_eq!(value["results"][0]["score"], 50.0);
        assert_eq!(value["results"][0]["library"]["id"], "a");
    }

    #[test]
    fn markdown_evaluate_lists_dimensions() {
        let ds = dataset();
        let results = vec![Evaluation {
            library: lib("a"),
            scores: BTreeMap::from([("performance".to_string(), 5u8)]),
            total_score: 100.0,
        }];
        let out =
            render_evaluate(&ds, &ds.dimensions, &results, OutputFormat::Markdown).unwrap();
        assert!(out.contains("- Dimensions: performance"));
        assert!(out.contains("## 1. A (100.0/100)"));
        assert!(out.contains("- Performance: 5/5"));
    }

    #[test]
    fn markdown_compare_lists_attributes() {
        let ds = dataset();
        let out = render_compare(&ds, &ds.libraries, OutputFormat::Markdown).unwrap();
        assert!(out.contains("## A"));
        assert!(out.contains("## B"));
        assert!(out.contains("- framework: react, vue"));
        assert!(out.contains("- typescript: true"));
    }

    #[test]
    fn json_export_round_trips_collection_counts() {
        let ds = dataset();
        let out = render_export(&ds, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["uiLibraries"].as_array().unwrap().len(), 2);
        assert_eq!(value["evaluationDimensions"].as_array().unwrap().len(), 1);
        assert_eq!(value["useCases"].as_array().unwrap().len(), 0);
        assert_eq!(value["designTrends"].as_array().unwrap().len(), 0);
        assert_eq!(value["source"], "seed");
    }

    #[test]
    fn markdown_export_prints_counts() {
        let out = render_export(&dataset(), OutputFormat::Markdown).unwrap();
        assert!(out.contains("- uiLibraries: 2"));
        assert!(out.contains("- evaluationDimensions: 1"));
    }
}
