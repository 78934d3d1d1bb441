// Influence aggregation — the "gravitational pull" of a keyword set.
//
// Each keyword contributes its full association row; a style's influence is
// the sum of the weights it receives from every keyword. Keywords from the
// input set stay in the map — filtering out self-association noise is the
// caller's job, done downstream when ranking.

use std::collections::BTreeMap;

use crate::data::StyleData;

/// Sum the co-occurrence weights every keyword contributes to each style.
///
/// Pure function of its inputs; keywords without a table entry contribute
/// nothing.
pub fn aggregate_influence(keywords: &[String], data: &StyleData) -> BTreeMap<String, f64> {
    let mut scores: BTreeMap<String, f64> = BTreeMap::new();
    for keyword in keywords {
        if let Some(associations) = data.associations(keyword) {
            for (style, weight) in associations {
                *scores.entry(style.clone()).or_insert(0.0) += weight;
            }
        }
    }
    scores
}

/// Rank influence scores descending as `log10(score + 1)`, excluding the
/// input keywords themselves. Ties fall back to alphabetical order (the map
/// iterates sorted, and the sort is stable).
pub fn rank_influences(
    scores: &BTreeMap<String, f64>,
    exclude: &[String],
) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = scores
        .iter()
        .filter(|(style, _)| !exclude.contains(*style))
        .map(|(style, score)| (style.clone(), (score + 1.0).log10()))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}
