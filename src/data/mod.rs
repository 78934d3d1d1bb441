// Static style data — the co-occurrence table and vocabulary.
//
// Everything the scoring engine consumes lives behind `StyleData`: the fixed
// vocabulary of style keywords and the style -> style -> weight co-occurrence
// table. The table is asymmetric in general (A's entry for B need not equal
// B's entry for A), so association checks consult both directions.
//
// Loaded once at startup and passed by reference into every computation.
// Nothing here is mutated after construction.

pub mod personality;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Style -> co-occurrence weight, for one source style.
pub type AssociationMap = BTreeMap<String, f64>;

/// Styles rendered fully uppercased instead of title-cased.
pub const ACRONYMS: &[&str] = &["edm", "j-pop", "k-pop", "r&b"];

/// The immutable style dataset: vocabulary plus co-occurrence table.
#[derive(Debug, Clone)]
pub struct StyleData {
    styles: BTreeSet<String>,
    co_occurrence: BTreeMap<String, AssociationMap>,
}

/// On-disk document shape. Both keys are required and must be non-empty.
#[derive(Deserialize)]
struct RawStyleData {
    default_styles: Vec<String>,
    co_existing_styles_dict: BTreeMap<String, AssociationMap>,
}

impl StyleData {
    /// Load and validate the style dataset from a JSON file.
    ///
    /// Failures here are fatal for the process — there is nothing to analyze
    /// without the table, so the caller should abort startup.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style data file {}", path.display()))?;
        let raw: RawStyleData = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse style data file {}", path.display()))?;

        Self::from_parts(
            raw.default_styles.into_iter().collect(),
            raw.co_existing_styles_dict,
        )
        .with_context(|| format!("Invalid style data in {}", path.display()))
    }

    /// Build a dataset from already-parsed parts, validating the invariants:
    /// non-empty vocabulary, non-empty table, non-negative weights.
    pub fn from_parts(
        styles: BTreeSet<String>,
        co_occurrence: BTreeMap<String, AssociationMap>,
    ) -> Result<Self> {
        if styles.is_empty() {
            anyhow::bail!("style data has an empty 'default_styles' vocabulary");
        }
        if co_occurrence.is_empty() {
            anyhow::bail!("style data has an empty 'co_existing_styles_dict' table");
        }
        for (style, associations) in &co_occurrence {
            for (other, weight) in associations {
                if *weight < 0.0 {
                    anyhow::bail!(
                        "negative co-occurrence weight {weight} for '{style}' -> '{other}'"
                    );
                }
            }
        }
        Ok(Self {
            styles,
            co_occurrence,
        })
    }

    /// The full vocabulary of recognized style keywords.
    pub fn styles(&self) -> &BTreeSet<String> {
        &self.styles
    }

    pub fn is_known_style(&self, style: &str) -> bool {
        self.styles.contains(style)
    }

    /// Direct associations of a style, or None when the table has no entry.
    pub fn associations(&self, style: &str) -> Option<&AssociationMap> {
        self.co_occurrence.get(style)
    }

    /// One-directional co-occurrence weight `from -> to` (0.0 when absent).
    pub fn weight(&self, from: &str, to: &str) -> f64 {
        self.co_occurrence
            .get(from)
            .and_then(|assocs| assocs.get(to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether two styles are directly associated in either direction.
    pub fn are_associated(&self, a: &str, b: &str) -> bool {
        self.weight(a, b) > 0.0 || self.weight(b, a) > 0.0
    }

    /// A style's associations sorted by weight descending (alphabetical on
    /// ties, since the underlying map iterates in sorted order), truncated
    /// to `n` entries.
    pub fn top_associations(&self, style: &str, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .associations(style)
            .map(|assocs| assocs.iter().map(|(s, w)| (s.as_str(), *w)).collect())
            .unwrap_or_default();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(n);
        ranked
    }
}

/// Format a style for display: acronyms uppercased, everything else
/// title-cased word by word ("hip hop" -> "Hip Hop", "r&b" -> "R&B").
pub fn format_label(style: &str) -> String {
    if ACRONYMS.contains(&style) {
        return style.to_uppercase();
    }
    style
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
