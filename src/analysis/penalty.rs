// Negative-influence penalization — the "repulsive force".
//
// Excluding a style should suppress more than the literal term: the styles
// it most strongly co-occurs with are its stylistic neighborhood, and their
// scores get dampened too. Distant styles are left untouched so the penalty
// does not flatten the whole influence landscape.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::data::StyleData;

/// Multiplier applied once to every tainted style's score.
pub const TAINT_PENALTY: f64 = 0.1;

/// How many of a negative keyword's strongest associations get tainted.
pub const TAINT_NEIGHBORS: usize = 5;

/// Dampen scores of styles closely associated with the negative keywords.
///
/// For each negative keyword, its top `TAINT_NEIGHBORS` associations by
/// weight are marked tainted; the tainted union is penalized by
/// `TAINT_PENALTY` exactly once per style, no matter how many negative
/// keywords taint it. Negative keywords present in the map are forced to 0.
/// Returns the tainted set so callers can surface it (graph coloring).
pub fn apply_negative_penalty(
    scores: &mut BTreeMap<String, f64>,
    negative_keywords: &BTreeSet<String>,
    data: &StyleData,
) -> BTreeSet<String> {
    let mut tainted: BTreeSet<String> = BTreeSet::new();
    for negative in negative_keywords {
        for (style, _) in data.top_associations(negative, TAINT_NEIGHBORS) {
            tainted.insert(style.to_string());
        }
    }

    for style in &tainted {
        if let Some(score) = scores.get_mut(style) {
            *score *= TAINT_PENALTY;
        }
    }

    for negative in negative_keywords {
        if let Some(score) = scores.get_mut(negative) {
            *score = 0.0;
        }
    }

    if !tainted.is_empty() {
        debug!(
            tainted = tainted.len(),
            negatives = negative_keywords.len(),
            "Applied negative-influence penalty"
        );
    }

    tainted
}
