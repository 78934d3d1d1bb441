// Style exploration — single-style neighborhoods and two-style fusions.
//
// The explorer answers "what orbits this style" rather than scoring a whole
// prompt: a ranked association list for charting, the neighborhood or fusion
// graph, and a creative brief ready for polishing. Fusion scoring applies a
// synergy boost to styles both inputs share, so common ground outranks
// either side's solo associations.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::brief::{fusion_brief, single_style_brief};
use crate::data::StyleData;
use crate::graph::{fusion_map, log_weight, style_neighborhood, GraphData};

/// Entries in the ranked association list (the bar-chart data).
const CHART_LIMIT: usize = 15;

/// Multiplier for styles associated with both fusion inputs.
const SYNERGY_BOOST: f64 = 1.5;

/// The result of exploring one style or a fusion of two.
#[derive(Debug, Clone, Serialize)]
pub struct ExplorerAnalysis {
    pub primary_style: String,
    pub secondary_style: Option<String>,
    /// Strongest associations as (style, log10-scaled score), descending.
    pub ranked_associations: Vec<(String, f64)>,
    /// Node/edge lists for an external graph renderer.
    pub graph: GraphData,
    /// The structured brief handed to the prompt polisher.
    pub creative_brief: String,
}

/// Analyze a single style, or a fusion when `secondary` is given.
pub fn analyze_styles(
    primary: &str,
    secondary: Option<&str>,
    negative_keywords: &BTreeSet<String>,
    creative_direction: Option<&str>,
    data: &StyleData,
) -> Result<ExplorerAnalysis> {
    require_known(primary, data)?;
    if let Some(style) = secondary {
        require_known(style, data)?;
    }

    let analysis = match secondary {
        None => {
            let ranked_associations: Vec<(String, f64)> = data
                .top_associations(primary, CHART_LIMIT)
                .into_iter()
                .map(|(style, weight)| (style.to_string(), log_weight(weight)))
                .collect();
            ExplorerAnalysis {
                primary_style: primary.to_string(),
                secondary_style: None,
                ranked_associations,
                graph: style_neighborhood(primary, data),
                creative_brief: single_style_brief(
                    primary,
                    negative_keywords,
                    creative_direction,
                    data,
                ),
            }
        }
        Some(secondary) => {
            let ranked_associations = combined_associations(primary, secondary, data);
            ExplorerAnalysis {
                primary_style: primary.to_string(),
                secondary_style: Some(secondary.to_string()),
                ranked_associations,
                graph: fusion_map(primary, secondary, data),
                creative_brief: fusion_brief(
                    primary,
                    secondary,
                    negative_keywords,
                    creative_direction,
                    data,
                ),
            }
        }
    };

    info!(
        primary = primary,
        secondary = secondary.unwrap_or("-"),
        associations = analysis.ranked_associations.len(),
        "Explored style"
    );

    Ok(analysis)
}

fn require_known(style: &str, data: &StyleData) -> Result<()> {
    if !data.is_known_style(style) {
        anyhow::bail!("Unknown style '{style}'. Run the `styles` command to list the vocabulary.");
    }
    Ok(())
}

/// Sum both styles' association rows, boosting shared associates.
fn combined_associations(primary: &str, secondary: &str, data: &StyleData) -> Vec<(String, f64)> {
    let empty = BTreeMap::new();
    let assocs_a = data.associations(primary).unwrap_or(&empty);
    let assocs_b = data.associations(secondary).unwrap_or(&empty);

    let keys: BTreeSet<&String> = assocs_a.keys().chain(assocs_b.keys()).collect();
    let mut combined: Vec<(String, f64)> = keys
        .into_iter()
        .map(|key| {
            let a = assocs_a.get(key).copied().unwrap_or(0.0);
            let b = assocs_b.get(key).copied().unwrap_or(0.0);
            let mut score = a + b;
            if a > 0.0 && b > 0.0 {
                score *= SYNERGY_BOOST;
            }
            (key.clone(), score)
        })
        .collect();
    combined.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    combined.truncate(CHART_LIMIT);
    combined
        .into_iter()
        .map(|(style, score)| (style, log_weight(score)))
        .collect()
}
