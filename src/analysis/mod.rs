// Prompt analysis — the scoring pipeline behind the `analyze` command.
//
// Each analysis is a pure function over the request text and the immutable
// style dataset:
// 1. Extract positive and negative keywords (negative wins on conflict)
// 2. Aggregate influence scores and compute cohesion
// 3. Apply the negative-influence penalty
// 4. Rank influences, build the fingerprint and suggestions
// 5. Project the association graph and annotate the prompt

pub mod annotate;
pub mod cohesion;
pub mod explorer;
pub mod influence;
pub mod keywords;
pub mod penalty;
pub mod suggest;

use std::collections::BTreeSet;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::data::StyleData;
use crate::graph::{prompt_map, GraphData};
use self::suggest::SuggestionReport;

/// Entries in the stylistic fingerprint.
pub const FINGERPRINT_SIZE: usize = 10;

/// The complete result of analyzing one prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PromptAnalysis {
    /// Recognized positive keywords, sorted.
    pub recognized_keywords: Vec<String>,
    /// Recognized negative keywords, sorted.
    pub negative_keywords: Vec<String>,
    /// Connectivity of the positive keywords, 0-100.
    pub cohesion_score: f64,
    /// Top influenced styles as (style, log10-scaled score), descending.
    pub fingerprint: Vec<(String, f64)>,
    /// Node/edge lists for an external graph renderer.
    pub graph: GraphData,
    /// The prompt with recognized keywords wrapped in tooltip markup.
    pub annotated_html: String,
    /// The co-pilot's verdict and remediation proposals.
    pub suggestion: SuggestionReport,
    /// RFC 3339 timestamp of the analysis.
    pub analyzed_at: String,
}

/// Analyze a free-text prompt against the style dataset.
///
/// `negative_text` is free text too (typically comma-separated); only terms
/// from the vocabulary are honored. Yields a user-facing error when no
/// positive keywords survive — an empty prompt is a request problem, not a
/// crash.
pub fn analyze_prompt(
    prompt_text: &str,
    negative_text: &str,
    data: &StyleData,
) -> Result<PromptAnalysis> {
    let negative_keywords: BTreeSet<String> =
        keywords::extract_keywords(negative_text, data.styles())
            .into_iter()
            .collect();
    let recognized: Vec<String> = keywords::extract_keywords(prompt_text, data.styles())
        .into_iter()
        .filter(|kw| !negative_keywords.contains(kw))
        .collect();

    if recognized.is_empty() {
        anyhow::bail!("No recognized style keywords were found in the prompt.");
    }

    let mut influence_scores = influence::aggregate_influence(&recognized, data);
    let cohesion_score = cohesion::cohesion_score(&recognized, data);
    let tainted = penalty::apply_negative_penalty(&mut influence_scores, &negative_keywords, data);

    // Positive keywords would only echo themselves back; negative keywords
    // are pinned at zero. Neither belongs in the ranking.
    let mut excluded = recognized.clone();
    excluded.extend(negative_keywords.iter().cloned());
    let ranked = influence::rank_influences(&influence_scores, &excluded);

    let fingerprint: Vec<(String, f64)> = ranked.iter().take(FINGERPRINT_SIZE).cloned().collect();
    let suggestion = suggest::generate_suggestions(cohesion_score, &recognized, &ranked, data);
    let annotated_html = annotate::annotate_prompt(prompt_text, &recognized, data);
    let graph = prompt_map(
        &recognized,
        &ranked,
        &influence_scores,
        &negative_keywords,
        &tainted,
        data,
    );

    info!(
        keywords = recognized.len(),
        negatives = negative_keywords.len(),
        cohesion = format!("{cohesion_score:.1}"),
        influences = ranked.len(),
        "Analyzed prompt"
    );

    Ok(PromptAnalysis {
        recognized_keywords: recognized,
        negative_keywords: negative_keywords.into_iter().collect(),
        cohesion_score,
        fingerprint,
        graph,
        annotated_html,
        suggestion,
        analyzed_at: chrono::Utc::now().to_rfc3339(),
    })
}
