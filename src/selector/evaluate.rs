//! Multi-dimension evaluation: per-dimension 1-5 scores with a weighted
//! 0-100 aggregate.

use std::collections::BTreeMap;

use serde::Serialize;

use super::scoring::is_compact_bundle;
use crate::dataset::{Dataset, Dimension, Library};

/// One evaluated library: per-dimension scores keyed by dimension id,
/// plus the weighted total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub library: Library,
    pub scores: BTreeMap<String, u8>,
    pub total_score: f64,
}

/// Ordinal mapping shared by the rating vocabularies. Unrecognized values
/// land on the neutral 3.
pub fn level_score(value: &str) -> u8 {
    match value {
        "excellent" | "high" | "very-active" => 5,
        "good" | "active" => 4,
        "average" | "medium" | "moderate" => 3,
        "poor" | "low" | "inactive" => 2,
        _ => 3,
    }
}

/// Automatic 1-5 score for one library on one dimension. Unknown dimension
/// ids score the neutral 3 rather than erroring.
pub fn dimension_score(lib: &Library, dimension_id: &str) -> u8 {
    match dimension_id {
        "accessibility" => level_score(&lib.accessibility),
        "customization" => level_score(&lib.customization),
        "ecosystem" => level_score(&lib.community),
        "performance" => {
            if is_compact_bundle(&lib.bundle_size) {
                5
            } else if lib.bundle_size.contains("200KB") {
                4
            } else if lib.bundle_size.contains("300KB") {
                3
            } else {
                2
            }
        }
        "developer-experience" => {
            if lib.documentation == "excellent" && lib.typescript {
                5
            } else if lib.documentation == "good" && lib.typescript {
                4
            } else if lib.documentation == "good" {
                3
            } else {
                2
            }
        }
        "enterprise-readiness" => {
            if lib.enterprise_ready {
                5
            } else {
                3
            }
        }
        _ => 3,
    }
}

/// Weighted average over dimensions with a positive score, rescaled from
/// the 1-5 range to 0-100. No contributing weight means 0.
pub fn total_weighted_score(scores: &BTreeMap<String, u8>, dimensions: &[Dimension]) -> f64 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;
    for dim in dimensions {
        if let Some(&score) = scores.get(&dim.id) {
            if score > 0 {
                total += f64::from(score) * dim.weight;
                weight_sum += dim.weight;
            }
        }
    }
    if weight_sum > 0.0 {
        total / weight_sum * 20.0
    } else {
        0.0
    }
}

/// Evaluate the requested libraries on the requested dimensions (all
/// dimensions when none are named). Unknown ids on either list are silently
/// skipped. Returns the evaluations sorted descending by total (stable)
/// together with the dimensions actually used.
pub fn evaluate(
    dataset: &Dataset,
    library_ids: &[String],
    dimension_ids: &[String],
) -> (Vec<Evaluation>, Vec<Dimension>) {
    let dimensions: Vec<Dimension> = if dimension_ids.is_empty() {
        dataset.dimensions.clone()
    } else {
        dataset
            .dimensions
            .iter()
            .filter(|dim| dimension_ids.iter().any(|id| *id == dim.id))
            .cloned()
            .collect()
    };

    let mut results: Vec<Evaluation> = dataset
        .libraries
        .iter()
        .filter(|lib| library_ids.iter().any(|id| *id == lib.id))
        .map(|library| {
            let scores: BTreeMap<String, u8> = dimensions
                .iter()
                .map(|dim| (dim.id.clone(), dimension_score(library, &dim.id)))
                .collect();
            let total_score = total_weighted_score(&scores, &dimensions);
            Evaluation {
                library: library.clone(),
                scores,
                total_score,
            }
        })
        .collect();

    results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    (results, dimensions)
}
