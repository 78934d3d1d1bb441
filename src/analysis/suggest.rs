// Faction detection and the rule-based prompt co-pilot.
//
// A decision table driven by the cohesion score and keyword count:
//   - low cohesion with 2+ keywords: split the keywords into connected
//     components ("factions") and propose either bridge styles that pull the
//     two largest factions together or replacements for the smaller one;
//   - high cohesion: reinforce with the strongest related styles;
//   - anything else: generic guidance.
//
// Each branch produces a different body shape, so the body is a tagged
// union rather than a bag of optional fields.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::data::StyleData;

/// Below this cohesion score (with 2+ keywords) the prompt is treated as
/// stylistically split.
pub const LOW_COHESION_THRESHOLD: f64 = 40.0;

/// At or above this cohesion score the prompt is reinforced, not repaired.
pub const HIGH_COHESION_THRESHOLD: f64 = 75.0;

/// Influence ranks considered as bridge candidates.
const BRIDGE_POOL: usize = 50;

/// How many bridge styles to propose.
const BRIDGE_COUNT: usize = 3;

/// How many replacement alternatives to offer per conflicting keyword.
const REPLACEMENT_COUNT: usize = 3;

/// How many reinforcement styles to record for a cohesive prompt.
const REINFORCEMENT_COUNT: usize = 7;

/// Severity classification of a suggestion, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Success,
    Warning,
    Info,
}

/// A replacement proposal for one keyword that conflicts with the prompt's
/// dominant faction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// The keyword proposed for removal.
    pub conflict: String,
    /// Styles related to the dominant faction that could take its place.
    pub alternatives: Vec<String>,
}

/// Branch-specific suggestion payload. The renderer dispatches on the
/// variant, not on which optional fields happen to be set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scenario", rename_all = "snake_case")]
pub enum SuggestionBody {
    LowCohesion {
        intro: String,
        faction_a: Vec<String>,
        faction_b: Vec<String>,
        /// Styles with affinity to both factions, strongest product first.
        bridges: Vec<String>,
        replacements: Vec<Replacement>,
    },
    HighCohesion {
        intro: String,
        /// Top related styles worth adding, strongest first.
        reinforcements: Vec<String>,
    },
    Moderate {
        intro: String,
    },
}

/// The co-pilot's verdict on a prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionReport {
    pub title: String,
    pub severity: Severity,
    pub body: SuggestionBody,
}

/// Run the decision table over the scored prompt.
///
/// `ranked_influences` is the log-scaled influence ranking with the input
/// keywords already excluded (see `rank_influences`).
pub fn generate_suggestions(
    cohesion_score: f64,
    keywords: &[String],
    ranked_influences: &[(String, f64)],
    data: &StyleData,
) -> SuggestionReport {
    if cohesion_score < LOW_COHESION_THRESHOLD && keywords.len() > 1 {
        let factions = connected_factions(keywords, data);
        if factions.len() > 1 {
            return low_cohesion_report(&factions, keywords, ranked_influences, data);
        }
        // A single faction despite the low score means the split is too
        // diffuse to mediate; fall through to the generic guidance.
    }

    if cohesion_score >= HIGH_COHESION_THRESHOLD {
        let reinforcements: Vec<String> = ranked_influences
            .iter()
            .take(REINFORCEMENT_COUNT)
            .map(|(style, _)| style.clone())
            .collect();
        return SuggestionReport {
            title: "Excellent Cohesion!".to_string(),
            severity: Severity::Success,
            body: SuggestionBody::HighCohesion {
                intro: "To make your prompt even more focused, consider adding these \
                        highly-related keywords:"
                    .to_string(),
                reinforcements,
            },
        };
    }

    SuggestionReport {
        title: "Moderate Cohesion".to_string(),
        severity: Severity::Warning,
        body: SuggestionBody::Moderate {
            intro: "This can lead to unique genre fusions. If the results aren't what \
                    you expect, try adding more specific, related terms to guide the AI."
                .to_string(),
        },
    }
}

/// Partition keywords into connected components of the association graph.
///
/// An edge exists when the table holds a positive weight in either
/// direction. Components come back sorted by size descending; discovery
/// order (sorted keyword order) breaks ties, keeping the result
/// deterministic.
pub fn connected_factions(keywords: &[String], data: &StyleData) -> Vec<Vec<String>> {
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    let mut factions: Vec<Vec<String>> = Vec::new();

    for seed in keywords {
        if visited.contains(seed.as_str()) {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = vec![seed.as_str()];
        visited.insert(seed.as_str());
        while let Some(current) = queue.pop() {
            component.push(current.to_string());
            for other in keywords {
                if !visited.contains(other.as_str()) && data.are_associated(current, other) {
                    visited.insert(other.as_str());
                    queue.push(other.as_str());
                }
            }
        }
        component.sort();
        factions.push(component);
    }

    factions.sort_by(|a, b| b.len().cmp(&a.len()));
    factions
}

fn low_cohesion_report(
    factions: &[Vec<String>],
    keywords: &[String],
    ranked_influences: &[(String, f64)],
    data: &StyleData,
) -> SuggestionReport {
    let faction_a = &factions[0];
    let faction_b = &factions[1];

    // Bridge the gap: a candidate must have positive cumulative affinity to
    // both factions; the product rewards candidates well-connected to both
    // sides rather than just one.
    let mut bridge_scores: Vec<(String, f64)> = ranked_influences
        .iter()
        .take(BRIDGE_POOL)
        .filter_map(|(candidate, _)| {
            let affinity_a: f64 = faction_a.iter().map(|kw| data.weight(kw, candidate)).sum();
            let affinity_b: f64 = faction_b.iter().map(|kw| data.weight(kw, candidate)).sum();
            (affinity_a > 0.0 && affinity_b > 0.0)
                .then(|| (candidate.clone(), affinity_a * affinity_b))
        })
        .collect();
    bridge_scores.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    let bridges: Vec<String> = bridge_scores
        .into_iter()
        .take(BRIDGE_COUNT)
        .map(|(style, _)| style)
        .collect();

    // Strengthen the core: offer styles from the dominant faction's
    // neighborhood as replacements for each keyword of the smaller one.
    let mut reinforcement_pool: BTreeSet<String> = BTreeSet::new();
    for kw in faction_a {
        if let Some(associations) = data.associations(kw) {
            for style in associations.keys() {
                if !keywords.contains(style) {
                    reinforcement_pool.insert(style.clone());
                }
            }
        }
    }
    let alternatives: Vec<String> = reinforcement_pool
        .into_iter()
        .take(REPLACEMENT_COUNT)
        .collect();
    let replacements: Vec<Replacement> = faction_b
        .iter()
        .map(|conflict| Replacement {
            conflict: conflict.clone(),
            alternatives: alternatives.clone(),
        })
        .collect();

    SuggestionReport {
        title: "Low Cohesion Detected".to_string(),
        severity: Severity::Error,
        body: SuggestionBody::LowCohesion {
            intro: "Your prompt has two distinct stylistic groups:".to_string(),
            faction_a: faction_a.clone(),
            faction_b: faction_b.clone(),
            bridges,
            replacements,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn data_from(table: &[(&str, &[(&str, f64)])]) -> StyleData {
        let styles: BTreeSet<String> = table.iter().map(|(s, _)| s.to_string()).collect();
        let co: BTreeMap<String, BTreeMap<String, f64>> = table
            .iter()
            .map(|(s, assocs)| {
                (
                    s.to_string(),
                    assocs.iter().map(|(a, w)| (a.to_string(), *w)).collect(),
                )
            })
            .collect();
        StyleData::from_parts(styles, co).unwrap()
    }

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn factions_split_disconnected_groups() {
        let data = data_from(&[
            ("rock", &[("metal", 100.0)]),
            ("pop", &[("dance", 80.0)]),
        ]);
        let factions = connected_factions(&kws(&["metal", "pop", "rock"]), &data);
        assert_eq!(factions.len(), 2);
        assert_eq!(factions[0], kws(&["metal", "rock"]));
        assert_eq!(factions[1], kws(&["pop"]));
    }

    #[test]
    fn factions_use_either_edge_direction() {
        // Only metal -> rock is recorded; they still share a faction.
        let data = data_from(&[("metal", &[("rock", 40.0)])]);
        let factions = connected_factions(&kws(&["metal", "rock"]), &data);
        assert_eq!(factions.len(), 1);
    }

    #[test]
    fn low_cohesion_with_two_factions_reports_error() {
        let data = data_from(&[
            ("rock", &[("metal", 100.0), ("synthwave", 20.0)]),
            ("pop", &[("dance", 80.0), ("synthwave", 30.0)]),
        ]);
        let ranked = vec![
            ("synthwave".to_string(), 2.0),
            ("metal".to_string(), 1.9),
            ("dance".to_string(), 1.8),
        ];
        let report = generate_suggestions(0.0, &kws(&["pop", "rock"]), &ranked, &data);
        assert_eq!(report.severity, Severity::Error);
        match report.body {
            SuggestionBody::LowCohesion {
                faction_a,
                faction_b,
                bridges,
                replacements,
                ..
            } => {
                assert_eq!(faction_a, kws(&["pop"]));
                assert_eq!(faction_b, kws(&["rock"]));
                // Only synthwave has affinity to both factions.
                assert_eq!(bridges, kws(&["synthwave"]));
                assert_eq!(replacements.len(), 1);
                assert_eq!(replacements[0].conflict, "rock");
                assert_eq!(replacements[0].alternatives, kws(&["dance", "synthwave"]));
            }
            other => panic!("expected LowCohesion, got {other:?}"),
        }
    }

    #[test]
    fn single_faction_falls_through_to_moderate() {
        // Two keywords, connected, but a hypothetical low score: no split to
        // mediate, so the generic branch answers.
        let data = data_from(&[("rock", &[("metal", 100.0)])]);
        let report = generate_suggestions(30.0, &kws(&["metal", "rock"]), &[], &data);
        assert_eq!(report.severity, Severity::Warning);
        assert!(matches!(report.body, SuggestionBody::Moderate { .. }));
    }

    #[test]
    fn high_cohesion_recommends_top_influences() {
        let data = data_from(&[("jazz", &[("soul", 50.0)])]);
        let ranked: Vec<(String, f64)> = (0..10)
            .map(|i| (format!("style{i}"), 10.0 - i as f64))
            .collect();
        let report = generate_suggestions(100.0, &kws(&["jazz"]), &ranked, &data);
        assert_eq!(report.severity, Severity::Success);
        match report.body {
            SuggestionBody::HighCohesion { reinforcements, .. } => {
                assert_eq!(reinforcements.len(), 7);
                assert_eq!(reinforcements[0], "style0");
            }
            other => panic!("expected HighCohesion, got {other:?}"),
        }
    }

    #[test]
    fn high_cohesion_with_no_influences_is_tolerated() {
        let data = data_from(&[("jazz", &[("soul", 50.0)])]);
        let report = generate_suggestions(100.0, &kws(&["zydeco"]), &[], &data);
        match report.body {
            SuggestionBody::HighCohesion { reinforcements, .. } => {
                assert!(reinforcements.is_empty());
            }
            other => panic!("expected HighCohesion, got {other:?}"),
        }
    }

    #[test]
    fn moderate_band_reports_warning() {
        let data = data_from(&[("rock", &[("metal", 100.0)])]);
        let report = generate_suggestions(50.0, &kws(&["metal", "rock"]), &[], &data);
        assert_eq!(report.title, "Moderate Cohesion");
        assert_eq!(report.severity, Severity::Warning);
    }
}
