// Cohesion scoring — how connected a keyword set is.
//
// Every unordered pair of keywords counts as connected when the table holds
// a positive weight in either direction. The score is the connected share of
// all pairs, as a percentage. A single keyword (or none) cannot be
// incohesive, so the score is defined as exactly 100 there.

use crate::data::StyleData;

/// Percentage of keyword pairs directly associated in the dataset, in
/// [0, 100]. Exactly 100.0 for fewer than two keywords.
pub fn cohesion_score(keywords: &[String], data: &StyleData) -> f64 {
    if keywords.len() < 2 {
        return 100.0;
    }

    let mut connected = 0usize;
    let mut total = 0usize;
    for (i, a) in keywords.iter().enumerate() {
        for b in &keywords[i + 1..] {
            total += 1;
            if data.are_associated(a, b) {
                connected += 1;
            }
        }
    }
    (connected as f64 / total as f64) * 100.0
}
