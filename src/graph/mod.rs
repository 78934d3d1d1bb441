// Graph projection — node/edge lists for external renderers.
//
// Three analysis entry points (prompt analysis, single-style exploration,
// fusion exploration) share one projection algorithm: a builder that
// deduplicates nodes by id and applies the rank-driven color/size encoding.
// Edge values are log10-compressed so the visual scale stays usable across
// orders-of-magnitude weight differences.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::data::{format_label, StyleData};

pub const PRIMARY_NODE_COLOR: &str = "#FF6347"; // Tomato
pub const SECONDARY_NODE_COLOR: &str = "#4682B4"; // SteelBlue
pub const TERTIARY_NODE_COLOR: &str = "#D3D3D3"; // LightGray
pub const NEGATIVE_NODE_COLOR: &str = "#8B0000"; // DarkRed
pub const TAINTED_NODE_COLOR: &str = "#FFA500"; // Orange
pub const BRIDGE_NODE_COLOR: &str = "#32CD32"; // LimeGreen

/// First-degree neighbors shown around a primary style.
const FIRST_DEGREE_LIMIT: usize = 7;

/// Second-degree neighbors expanded per first-degree node.
const SECOND_DEGREE_LIMIT: usize = 2;

/// Associations per side consulted when finding fusion bridge nodes.
const BRIDGE_CANDIDATE_LIMIT: usize = 15;

/// Secondary nodes selected for the prompt map.
const PROMPT_NODE_LIMIT: usize = 20;

/// A renderable graph node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub size: f64,
    pub color: String,
    pub title: String,
}

/// A renderable weighted edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub value: f64,
    pub title: String,
}

/// Node/edge lists ready for an external force-directed renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Logarithmic compression applied to every edge weight.
pub fn log_weight(weight: f64) -> f64 {
    (weight + 1.0).log10()
}

/// Accumulates nodes (deduplicated by id) and edges.
struct GraphBuilder {
    graph: GraphData,
    ids: BTreeSet<String>,
}

impl GraphBuilder {
    fn new() -> Self {
        Self {
            graph: GraphData::default(),
            ids: BTreeSet::new(),
        }
    }

    fn has_node(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Add a node unless one with the same id already exists.
    fn add_node(&mut self, id: &str, size: f64, color: &str, title: String) {
        if self.ids.insert(id.to_string()) {
            self.graph.nodes.push(GraphNode {
                id: id.to_string(),
                label: format_label(id),
                size,
                color: color.to_string(),
                title,
            });
        }
    }

    fn add_edge(&mut self, from: &str, to: &str, value: f64, weight: f64) {
        self.graph.edges.push(GraphEdge {
            from: from.to_string(),
            to: to.to_string(),
            value,
            title: format!("Association Strength: {weight}"),
        });
    }

    fn finish(self) -> GraphData {
        self.graph
    }
}

/// Neighborhood of a single style: the style itself, its strongest direct
/// associations, and a thin second-degree fringe.
pub fn style_neighborhood(style: &str, data: &StyleData) -> GraphData {
    let mut builder = GraphBuilder::new();
    builder.add_node(
        style,
        30.0,
        PRIMARY_NODE_COLOR,
        format!("Selected Style: {}", format_label(style)),
    );

    let first_degree = data.top_associations(style, FIRST_DEGREE_LIMIT);
    for (assoc, weight) in &first_degree {
        builder.add_node(
            assoc,
            18.0,
            SECONDARY_NODE_COLOR,
            format!("Direct Association Strength: {weight}"),
        );
        builder.add_edge(style, assoc, log_weight(*weight) * 2.0, *weight);
    }

    for (first, _) in &first_degree {
        for (second, weight) in data.top_associations(first, SECOND_DEGREE_LIMIT) {
            builder.add_node(
                second,
                10.0,
                TERTIARY_NODE_COLOR,
                format!("Second-Degree Association Strength: {weight}"),
            );
            builder.add_edge(first, second, log_weight(weight), weight);
        }
    }

    builder.finish()
}

/// Fusion map of two styles: both primaries, their strongest associations,
/// and "bridge" nodes that appear among the top associations of both sides.
pub fn fusion_map(primary: &str, secondary: &str, data: &StyleData) -> GraphData {
    let top_a: BTreeSet<String> = data
        .top_associations(primary, BRIDGE_CANDIDATE_LIMIT)
        .into_iter()
        .map(|(s, _)| s.to_string())
        .collect();
    let top_b: BTreeSet<String> = data
        .top_associations(secondary, BRIDGE_CANDIDATE_LIMIT)
        .into_iter()
        .map(|(s, _)| s.to_string())
        .collect();
    let bridge_nodes: BTreeSet<&String> = top_a.intersection(&top_b).collect();

    let mut builder = GraphBuilder::new();
    for style in [primary, secondary] {
        builder.add_node(
            style,
            30.0,
            PRIMARY_NODE_COLOR,
            format!("Primary Style: {}", format_label(style)),
        );
    }

    for source in [primary, secondary] {
        for (assoc, weight) in data.top_associations(source, FIRST_DEGREE_LIMIT) {
            let is_bridge = bridge_nodes.contains(&assoc.to_string());
            let (color, prefix) = if is_bridge {
                (BRIDGE_NODE_COLOR, "Bridge Style")
            } else {
                (SECONDARY_NODE_COLOR, "Direct Association")
            };
            builder.add_node(
                assoc,
                18.0,
                color,
                format!(
                    "{prefix}: {}<br>Strength: {weight}",
                    format_label(assoc)
                ),
            );
            builder.add_edge(source, assoc, log_weight(weight) * 2.0, weight);
        }
    }

    builder.finish()
}

/// Shared top-association sets of a fusion pair (the bridge styles).
pub fn bridge_styles(primary: &str, secondary: &str, data: &StyleData) -> Vec<String> {
    let top_a: BTreeSet<String> = data
        .top_associations(primary, BRIDGE_CANDIDATE_LIMIT)
        .into_iter()
        .map(|(s, _)| s.to_string())
        .collect();
    data.top_associations(secondary, BRIDGE_CANDIDATE_LIMIT)
        .into_iter()
        .map(|(s, _)| s.to_string())
        .filter(|s| top_a.contains(s))
        .collect()
}

/// Full-prompt map: positive keywords as anchors, the strongest influenced
/// styles as secondary nodes sized by their min-max-normalized log score
/// (12 to 20 px), tainted styles highlighted, and no edges into negative
/// keywords.
pub fn prompt_map(
    keywords: &[String],
    ranked_influences: &[(String, f64)],
    raw_scores: &BTreeMap<String, f64>,
    negative_keywords: &BTreeSet<String>,
    tainted: &BTreeSet<String>,
    data: &StyleData,
) -> GraphData {
    let mut builder = GraphBuilder::new();
    for keyword in keywords {
        builder.add_node(
            keyword,
            25.0,
            PRIMARY_NODE_COLOR,
            format!("Your Keyword: {}", format_label(keyword)),
        );
    }

    let selected: Vec<&(String, f64)> = ranked_influences.iter().take(PROMPT_NODE_LIMIT).collect();
    let max_log = selected.first().map(|(_, s)| *s).unwrap_or(1.0);
    let min_log = selected.last().map(|(_, s)| *s).unwrap_or(1.0);

    for (style, log_score) in &selected {
        // A single distinct score value leaves nothing to normalize.
        let ratio = if max_log > min_log {
            (log_score - min_log) / (max_log - min_log)
        } else {
            0.0
        };
        let color = if tainted.contains(style) {
            TAINTED_NODE_COLOR
        } else {
            SECONDARY_NODE_COLOR
        };
        let raw = raw_scores.get(style).copied().unwrap_or(0.0);
        builder.add_node(
            style,
            12.0 + 8.0 * ratio,
            color,
            format!("Influence Score: {raw:.0}"),
        );
    }

    for keyword in keywords {
        if let Some(associations) = data.associations(keyword) {
            for (assoc, weight) in associations {
                if builder.has_node(assoc)
                    && assoc != keyword
                    && !negative_keywords.contains(assoc)
                {
                    builder.add_edge(keyword, assoc, log_weight(*weight), *weight);
                }
            }
        }
    }

    builder.finish()
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

    #[test]
    fn neighborhood_has_primary_and_scaled_edges() {
        let data = data_from(&[
            ("rock", &[("metal", 100.0), ("punk", 50.0)]),
            ("metal", &[("doom", 30.0)]),
        ]);
        let graph = style_neighborhood("rock", &data);

        let primary = &graph.nodes[0];
        assert_eq!(primary.id, "rock");
        assert_eq!(primary.size, 30.0);
        assert_eq!(primary.color, PRIMARY_NODE_COLOR);

        let first_edge = graph
            .edges
            .iter()
            .find(|e| e.from == "rock" && e.to == "metal")
            .unwrap();
        assert!((first_edge.value - log_weight(100.0) * 2.0).abs() < 1e-12);

        // Second-degree expansion of metal.
        assert!(graph.nodes.iter().any(|n| n.id == "doom" && n.size == 10.0));
        let second_edge = graph
            .edges
            .iter()
            .find(|e| e.from == "metal" && e.to == "doom")
            .unwrap();
        assert!((second_edge.value - log_weight(30.0)).abs() < 1e-12);
    }

    #[test]
    fn fusion_marks_shared_associations_as_bridges() {
        let data = data_from(&[
            ("rock", &[("metal", 100.0), ("synthwave", 40.0)]),
            ("electronic", &[("synth", 90.0), ("synthwave", 60.0)]),
        ]);
        let graph = fusion_map("rock", "electronic", &data);

        let bridge = graph.nodes.iter().find(|n| n.id == "synthwave").unwrap();
        assert_eq!(bridge.color, BRIDGE_NODE_COLOR);
        let plain = graph.nodes.iter().find(|n| n.id == "metal").unwrap();
        assert_eq!(plain.color, SECONDARY_NODE_COLOR);

        assert_eq!(bridge_styles("rock", "electronic", &data), vec!["synthwave"]);
    }

    #[test]
    fn prompt_map_sizes_span_12_to_20() {
        let data = data_from(&[("rock", &[("metal", 100.0), ("punk", 50.0)])]);
        let ranked = vec![
            ("metal".to_string(), log_weight(100.0)),
            ("punk".to_string(), log_weight(50.0)),
        ];
        let raw: BTreeMap<String, f64> =
            [("metal".to_string(), 100.0), ("punk".to_string(), 50.0)].into();
        let keywords = vec!["rock".to_string()];
        let graph = prompt_map(
            &keywords,
            &ranked,
            &raw,
            &BTreeSet::new(),
            &BTreeSet::new(),
            &data,
        );

        let metal = graph.nodes.iter().find(|n| n.id == "metal").unwrap();
        let punk = graph.nodes.iter().find(|n| n.id == "punk").unwrap();
        assert_eq!(metal.size, 20.0);
        assert_eq!(punk.size, 12.0);
    }

    #[test]
    fn prompt_map_excludes_edges_into_negatives() {
        let data = data_from(&[("rock", &[("metal", 100.0), ("pop", 60.0)])]);
        let ranked = vec![
            ("metal".to_string(), log_weight(100.0)),
            ("pop".to_string(), log_weight(6.0)),
        ];
        let raw: BTreeMap<String, f64> = [("metal".to_string(), 100.0)].into();
        let negatives: BTreeSet<String> = ["pop".to_string()].into();
        let keywords = vec!["rock".to_string()];
        let graph = prompt_map(&keywords, &ranked, &raw, &negatives, &BTreeSet::new(), &data);

        assert!(graph.edges.iter().any(|e| e.to == "metal"));
        assert!(!graph.edges.iter().any(|e| e.to == "pop"));
    }

    #[test]
    fn prompt_map_degenerate_scores_default_to_smallest_size() {
        let data = data_from(&[("rock", &[("metal", 10.0)])]);
        let ranked = vec![("metal".to_string(), log_weight(10.0))];
        let raw: BTreeMap<String, f64> = [("metal".to_string(), 10.0)].into();
        let graph = prompt_map(
            &["rock".to_string()],
            &ranked,
            &raw,
            &BTreeSet::new(),
            &BTreeSet::new(),
            &data,
        );
        let metal = graph.nodes.iter().find(|n| n.id == "metal").unwrap();
        assert_eq!(metal.size, 12.0);
    }

    #[test]
    fn tainted_styles_get_the_tainted_color() {
        let data = data_from(&[("rock", &[("metal", 100.0)])]);
        let ranked = vec![("metal".to_string(), log_weight(10.0))];
        let raw: BTreeMap<String, f64> = [("metal".to_string(), 10.0)].into();
        let tainted: BTreeSet<String> = ["metal".to_string()].into();
        let graph = prompt_map(
            &["rock".to_string()],
            &ranked,
            &raw,
            &BTreeSet::new(),
            &tainted,
            &data,
        );
        let metal = graph.nodes.iter().find(|n| n.id == "metal").unwrap();
        assert_eq!(metal.color, TAINTED_NODE_COLOR);
    }
}
