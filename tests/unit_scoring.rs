// Unit tests for the scoring pipeline's pure functions: influence
// aggregation, cohesion, and the negative-influence penalty.

use std::collections::{BTreeMap, BTreeSet};

use cadence::analysis::cohesion::cohesion_score;
use cadence::analysis::influence::{aggregate_influence, rank_influences};
use cadence::analysis::penalty::{apply_negative_penalty, TAINT_PENALTY};
use cadence::data::StyleData;

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

fn negatives(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// Cohesion — bounds and edge cases
// ============================================================

#[test]
fn cohesion_is_100_for_small_keyword_sets() {
    let data = data_from(&[("rock", &[("metal", 1.0)])]);
    assert_eq!(cohesion_score(&[], &data), 100.0);
    assert_eq!(cohesion_score(&kws(&["rock"]), &data), 100.0);
    // Even for a keyword absent from the table entirely.
    assert_eq!(cohesion_score(&kws(&["zydeco"]), &data), 100.0);
}

#[test]
fn cohesion_stays_within_bounds() {
    let data = data_from(&[
        ("rock", &[("metal", 100.0)]),
        ("pop", &[("dance", 80.0)]),
    ]);
    for set in [
        kws(&["rock", "pop"]),
        kws(&["rock", "metal"]),
        kws(&["rock", "metal", "pop", "dance"]),
    ] {
        let score = cohesion_score(&set, &data);
        assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
    }
}

#[test]
fn cohesion_grows_monotonically_with_connectivity() {
    let keywords = kws(&["a", "b", "c", "d"]);
    let zero_edges = data_from(&[("a", &[])]);
    let one_edge = data_from(&[("a", &[("b", 1.0)])]);
    let two_edges = data_from(&[("a", &[("b", 1.0), ("c", 1.0)])]);
    let three_edges = data_from(&[("a", &[("b", 1.0), ("c", 1.0), ("d", 1.0)])]);

    let scores: Vec<f64> = [zero_edges, one_edge, two_edges, three_edges]
        .iter()
        .map(|data| cohesion_score(&keywords, data))
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[1] >= pair[0], "cohesion regressed: {scores:?}");
    }
}

// ============================================================
// Influence — commutativity and incrementality
// ============================================================

#[test]
fn influence_is_order_independent() {
    let data = data_from(&[
        ("rock", &[("metal", 100.0), ("punk", 50.0)]),
        ("pop", &[("dance", 80.0), ("metal", 5.0)]),
        ("jazz", &[("soul", 70.0)]),
    ]);
    let forward = aggregate_influence(&kws(&["rock", "pop", "jazz"]), &data);
    let backward = aggregate_influence(&kws(&["jazz", "pop", "rock"]), &data);
    assert_eq!(forward, backward);
}

#[test]
fn influence_of_superset_equals_sum_of_parts() {
    let data = data_from(&[
        ("a", &[("x", 2.0), ("y", 3.0)]),
        ("b", &[("x", 5.0)]),
        ("c", &[("z", 7.0), ("x", 1.0)]),
    ]);
    let mut incremental = aggregate_influence(&kws(&["a", "b"]), &data);
    for (style, weight) in aggregate_influence(&kws(&["c"]), &data) {
        *incremental.entry(style).or_insert(0.0) += weight;
    }
    assert_eq!(incremental, aggregate_influence(&kws(&["a", "b", "c"]), &data));
}

#[test]
fn input_keywords_remain_in_the_intermediate_map() {
    // Filtering out self-association noise happens at ranking, not here.
    let data = data_from(&[("rock", &[("pop", 10.0)]), ("pop", &[("rock", 20.0)])]);
    let keywords = kws(&["pop", "rock"]);
    let scores = aggregate_influence(&keywords, &data);
    assert_eq!(scores["pop"], 10.0);
    assert_eq!(scores["rock"], 20.0);

    let ranked = rank_influences(&scores, &keywords);
    assert!(ranked.is_empty());
}

// ============================================================
// Penalty — idempotent taint union, zeroed negatives
// ============================================================

#[test]
fn style_tainted_by_two_negatives_is_reduced_exactly_once() {
    let data = data_from(&[
        ("pop", &[("dance", 80.0), ("upbeat", 60.0)]),
        ("edm", &[("dance", 90.0), ("house", 70.0)]),
    ]);
    let mut scores: BTreeMap<String, f64> = [("dance".to_string(), 200.0)].into();
    apply_negative_penalty(&mut scores, &negatives(&["edm", "pop"]), &data);
    // x0.1 once, not x0.01.
    assert!((scores["dance"] - 200.0 * TAINT_PENALTY).abs() < 1e-9);
}

#[test]
fn every_negative_keyword_ends_at_exactly_zero() {
    let data = data_from(&[("rock", &[("pop", 40.0), ("edm", 10.0)])]);
    let mut scores: BTreeMap<String, f64> =
        [("pop".to_string(), 40.0), ("edm".to_string(), 10.0)].into();
    apply_negative_penalty(&mut scores, &negatives(&["edm", "pop"]), &data);
    assert_eq!(scores["pop"], 0.0);
    assert_eq!(scores["edm"], 0.0);
}

#[test]
fn untainted_styles_are_untouched() {
    let data = data_from(&[("pop", &[("dance", 80.0)])]);
    let mut scores: BTreeMap<String, f64> =
        [("dance".to_string(), 10.0), ("metal".to_string(), 99.0)].into();
    apply_negative_penalty(&mut scores, &negatives(&["pop"]), &data);
    assert_eq!(scores["metal"], 99.0);
}

#[test]
fn taint_set_covers_at_most_five_per_negative() {
    let data = data_from(&[(
        "pop",
        &[
            ("a", 70.0),
            ("b", 60.0),
            ("c", 50.0),
            ("d", 40.0),
            ("e", 30.0),
            ("f", 20.0),
            ("g", 10.0),
        ],
    )]);
    let mut scores = BTreeMap::new();
    let tainted = apply_negative_penalty(&mut scores, &negatives(&["pop"]), &data);
    assert_eq!(tainted.len(), 5);
    assert!(tainted.contains("a") && tainted.contains("e"));
    assert!(!tainted.contains("f") && !tainted.contains("g"));
}
