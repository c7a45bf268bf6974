//! Match scoring: one library against one preference record.
//!
//! Each active preference facet contributes a fixed weight to the maximum
//! and awards full or partial points per the rules below. The final score
//! is points over maximum on a 0-100 scale; with no facets selected the
//! score is a neutral 50, since nothing can discriminate.

use std::collections::HashMap;

use serde::Serialize;

use super::prefs::Preferences;
use crate::dataset::{Dataset, Library, UseCase};

const FRAMEWORK_WEIGHT: f64 = 25.0;
const PROJECT_TYPE_WEIGHT: f64 = 25.0;
const PROJECT_TYPE_PARTIAL: f64 = 20.0;
/// Shared pool for all selected priorities; summed then clamped.
const PRIORITY_POOL: f64 = 30.0;
const DESIGN_STYLE_WEIGHT: f64 = 10.0;
const TEAM_SIZE_WEIGHT: f64 = 10.0;

/// One ranked recommendation entry.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub library: Library,
    pub score: f64,
    pub reasons: Vec<&'static str>,
}

/// A library with a small kilobyte-scale footprint: the descriptor names a
/// KB figure under 200 without an MB one, or carries the catalog's compact
/// marker. Descriptors at 200KB and above fall into the lower performance
/// tiers instead.
pub fn is_compact_bundle(bundle_size: &str) -> bool {
    if bundle_size.contains("lightweight") {
        return true;
    }
    if !bundle_size.contains("KB") || bundle_size.contains("MB") {
        return false;
    }
    kb_figure(bundle_size).map_or(true, |kb| kb < 200.0)
}

/// Numeric figure immediately preceding the first "KB" in the descriptor.
fn kb_figure(descriptor: &str) -> Option<f64> {
    let unit_at = descriptor.find("KB")?;
    let reversed: String = descriptor[..unit_at]
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let figure: String = reversed.chars().rev().collect();
    figure.parse().ok()
}

fn framework_matches(lib: &Library, framework: &str) -> bool {
    lib.framework.iter().any(|f| f == framework)
        || (framework == "other" && lib.framework.iter().any(|f| f == "universal"))
}

fn use_case_recommends(use_case: Option<&&UseCase>, lib: &Library) -> bool {
    use_case.is_some_and(|uc| uc.recommended_libraries.iter().any(|id| *id == lib.id))
}

/// Suitability of one library for the given preferences, 0-100.
pub fn match_score(
    lib: &Library,
    prefs: &Preferences,
    use_cases: &HashMap<&str, &UseCase>,
) -> f64 {
    // No facet selected: nothing can discriminate between libraries.
    if prefs.is_empty() {
        return 50.0;
    }

    let mut points = 0.0;
    let mut max_points = 0.0;

    if !prefs.framework.is_empty() {
        max_points += FRAMEWORK_WEIGHT;
        if framework_matches(lib, &prefs.framework) {
            points += FRAMEWORK_WEIGHT;
        }
    }

    if !prefs.project_type.is_empty() {
        max_points += PROJECT_TYPE_WEIGHT;
        let use_case = use_cases.get(prefs.project_type.as_str());
        if use_case_recommends(use_case, lib) {
            points += PROJECT_TYPE_WEIGHT;
        } else if prefs.project_type.contains("enterprise") && lib.enterprise_ready {
            points += PROJECT_TYPE_PARTIAL;
        } else if (prefs.project_type.contains("rapid") || prefs.project_type.contains("startup"))
            && (lib.learning_curve == "easy" || is_compact_bundle(&lib.bundle_size))
        {
            points += PROJECT_TYPE_PARTIAL;
        }
    }

    if !prefs.priorities.is_empty() {
        max_points += PRIORITY_POOL;
        let mut priority_points: f64 = 0.0;
        for priority in &prefs.priorities {
            match priority.as_str() {
                "performance" if is_compact_bundle(&lib.bundle_size) => priority_points += 10.0,
                "accessibility" => match lib.accessibility.as_str() {
                    "excellent" => priority_points += 10.0,
                    "good" => priority_points += 7.0,
                    _ => {}
                },
                "customization" if lib.customization == "high" => priority_points += 10.0,
                "ecosystem" => match lib.community.as_str() {
                    "very-active" => priority_points += 10.0,
                    "active" => priority_points += 7.0,
                    _ => {}
                },
                "dx" if lib.documentation == "excellent" && lib.typescript => {
                    priority_points += 10.0
                }
                "enterprise" if lib.enterprise_ready => priority_points += 10.0,
                _ => {}
            }
        }
        points += priority_points.min(PRIORITY_POOL);
    }

    if !prefs.design_style.is_empty() {
        max_points += DESIGN_STYLE_WEIGHT;
        if lib.design_style.iter().any(|s| *s == prefs.design_style) {
            points += DESIGN_STYLE_WEIGHT;
        }
    }

    if !prefs.team_size.is_empty() {
        max_points += TEAM_SIZE_WEIGHT;
        let fits = match prefs.team_size.as_str() {
            "large" => lib.enterprise_ready,
            "small" => lib.learning_curve == "easy",
            "medium" => true,
            _ => false,
        };
        if fits {
            points += TEAM_SIZE_WEIGHT;
        }
    }

    // At least one facet contributed to the maximum above.
    points / max_points * 100.0
}

/// Human-readable justifications for a match, capped at the first four.
///
/// Conditions repeat the scoring facets in a fixed order; the order matters
/// because of the truncation. The last two checks (TypeScript, dark mode)
/// are unconditional library traits, not preference facets.
pub fn build_reasons(
    lib: &Library,
    prefs: &Preferences,
    use_cases: &HashMap<&str, &UseCase>,
) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    let has_priority = |p: &str| prefs.priorities.iter().any(|x| x == p);

    if !prefs.framework.is_empty() && framework_matches(lib, &prefs.framework) {
        reasons.push("Supports your target framework");
    }

    let use_case = if prefs.project_type.is_empty() {
        None
    } else {
        use_cases.get(prefs.project_type.as_str())
    };
    if use_case_recommends(use_case, lib) {
        reasons.push("Recommended for this project type");
    }

    if has_priority("performance") && is_compact_bundle(&lib.bundle_size) {
        reasons.push("Compact bundle size");
    }

    if has_priority("accessibility") && lib.accessibility == "excellent" {
        reasons.push("Excellent accessibility support");
    }

    if has_priority("customization") && lib.customization == "high" {
        reasons.push("Highly customizable");
    }

    if has_priority("ecosystem") && (lib.community == "very-active" || lib.community == "active") {
        reasons.push("Active community ecosystem");
    }

    if has_priority("dx") && lib.documentation == "excellent" && lib.typescript {
        reasons.push("Excellent docs and TypeScript DX");
    }

    if has_priority("enterprise") && lib.enterprise_ready {
        reasons.push("Ready for enterprise use");
    }

    if !prefs.design_style.is_empty() && lib.design_style.iter().any(|s| *s == prefs.design_style)
    {
        reasons.push("Matches your design style");
    }

    if lib.typescript {
        reasons.push("First-class TypeScript support");
    }

    if lib.dark_mode {
        reasons.push("Built-in dark mode");
    }

    reasons.truncate(4);
    reasons
}

/// Score every library, sort descending (stable, so catalog order breaks
/// ties), and keep the top `top` entries (floor 1).
pub fn recommend(dataset: &Dataset, prefs: &Preferences, top: usize) -> Vec<Recommendation> {
    let use_cases = dataset.use_case_index();

    let mut results: Vec<Recommendation> = dataset
        .libraries
        .iter()
        .map(|library| Recommendation {
            library: library.clone(),
            score: match_score(library, prefs, &use_cases),
            reasons: build_reasons(library, prefs, &use_cases),
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(top.max(1));
    results
}
