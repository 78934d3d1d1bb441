// Colored terminal output for analyses, fingerprints, and suggestions.
//
// This module handles all terminal-specific formatting: colors, bars,
// section headers. The main.rs display paths delegate here; JSON output
// bypasses it entirely.

use colored::Colorize;

use crate::analysis::explorer::ExplorerAnalysis;
use crate::analysis::suggest::{
    Severity, SuggestionBody, SuggestionReport, HIGH_COHESION_THRESHOLD, LOW_COHESION_THRESHOLD,
};
use crate::analysis::PromptAnalysis;
use crate::data::format_label;

/// Display a full prompt analysis.
pub fn display_prompt_analysis(analysis: &PromptAnalysis) {
    println!("\n{}", "=== Prompt Analysis ===".bold());
    println!();

    let keyword_list = analysis
        .recognized_keywords
        .iter()
        .map(|kw| format_label(kw))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  Recognized keywords: {}", keyword_list.bold());

    if !analysis.negative_keywords.is_empty() {
        let negative_list = analysis
            .negative_keywords
            .iter()
            .map(|kw| format_label(kw))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  Negative keywords:   {}", negative_list.red());
    }

    let score = analysis.cohesion_score;
    let verdict = if score >= HIGH_COHESION_THRESHOLD {
        "Excellent Cohesion".green()
    } else if score >= LOW_COHESION_THRESHOLD {
        "Moderate Cohesion".yellow()
    } else {
        "Low Cohesion".red()
    };
    println!("  Cohesion score:      {score:.1} / 100  ({verdict})");

    display_fingerprint(&analysis.fingerprint);
    display_suggestion(&analysis.suggestion);

    println!(
        "  {}",
        format!(
            "Association map: {} nodes, {} edges (use --json for renderer data)",
            analysis.graph.nodes.len(),
            analysis.graph.edges.len()
        )
        .dimmed()
    );
    println!();
}

/// Display the top stylistic influences as a bar chart.
fn display_fingerprint(fingerprint: &[(String, f64)]) {
    if fingerprint.is_empty() {
        println!("\n  No stylistic influences beyond your own keywords.\n");
        return;
    }

    println!("\n  {}", "Stylistic Fingerprint".bold());

    let bar_width: usize = 20;
    let max_score = fingerprint[0].1.max(f64::MIN_POSITIVE);

    for (i, (style, score)) in fingerprint.iter().enumerate() {
        let ratio = score / max_score;
        let filled = (ratio * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled.min(bar_width)),
            " ".repeat(bar_width.saturating_sub(filled))
        );
        let colored_bar = if ratio >= 0.75 {
            bar.bright_green()
        } else if ratio >= 0.40 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };
        println!(
            "  {:>2}. {:<24} {} {:.2}",
            i + 1,
            format_label(style),
            colored_bar,
            score
        );
    }
    println!();
}

/// Display the co-pilot's suggestion report.
pub fn display_suggestion(suggestion: &SuggestionReport) {
    println!("  {} {}", severity_marker(suggestion.severity), suggestion.title.bold());

    match &suggestion.body {
        SuggestionBody::LowCohesion {
            intro,
            faction_a,
            faction_b,
            bridges,
            replacements,
        } => {
            println!("    {intro}");
            println!("      Cluster 1: {}", faction_a.join(", ").bold());
            println!("      Cluster 2: {}", faction_b.join(", ").bold());
            if !bridges.is_empty() {
                println!("    {}", "Bridge the Gap (Create a Fusion)".underline());
                for bridge in bridges {
                    println!("      - Add `{bridge}` to connect your ideas.");
                }
            }
            if !replacements.is_empty() {
                println!("    {}", "Strengthen the Core (Focus)".underline());
                for replacement in replacements {
                    println!(
                        "      - Consider replacing `{}` with terms like `{}`.",
                        replacement.conflict,
                        replacement.alternatives.join(", ")
                    );
                }
            }
        }
        SuggestionBody::HighCohesion {
            intro,
            reinforcements,
        } => {
            if reinforcements.is_empty() {
                println!("    Your keywords already form a tight cluster.");
            } else {
                println!("    {intro}");
                let shown = reinforcements
                    .iter()
                    .take(3)
                    .map(|r| format!("`{r}`"))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("      {shown}");
            }
        }
        SuggestionBody::Moderate { intro } => {
            println!("    {intro}");
        }
    }
    println!();
}

/// Display an explorer (single-style or fusion) analysis.
pub fn display_explorer(analysis: &ExplorerAnalysis) {
    let title = match &analysis.secondary_style {
        Some(secondary) => format!(
            "=== Fusion: {} x {} ===",
            format_label(&analysis.primary_style),
            format_label(secondary)
        ),
        None => format!("=== Style: {} ===", format_label(&analysis.primary_style)),
    };
    println!("\n{}", title.bold());

    if analysis.ranked_associations.is_empty() {
        println!("\n  No recorded associations for this selection.");
    } else {
        println!("\n  {}", "Top Associations (log scale)".bold());
        let bar_width: usize = 20;
        let max_score = analysis.ranked_associations[0].1.max(f64::MIN_POSITIVE);
        for (i, (style, score)) in analysis.ranked_associations.iter().enumerate() {
            let filled = ((score / max_score) * bar_width as f64).round() as usize;
            println!(
                "  {:>2}. {:<24} [{}{}] {:.2}",
                i + 1,
                format_label(style),
                "=".repeat(filled.min(bar_width)),
                " ".repeat(bar_width.saturating_sub(filled)),
                score
            );
        }
    }

    println!(
        "\n  {}",
        format!(
            "Association map: {} nodes, {} edges (use --json for renderer data)",
            analysis.graph.nodes.len(),
            analysis.graph.edges.len()
        )
        .dimmed()
    );

    println!("\n  {}", "Creative Brief".bold());
    for line in analysis.creative_brief.lines() {
        println!("    {line}");
    }
    println!();
}

/// Display the polished prompt (or the error string the polisher produced).
pub fn display_polished(polished: &str) {
    println!("  {}", "Polished Prompt".bold());
    if polished.starts_with("ERROR:") {
        println!("    {}", polished.red());
    } else {
        for line in polished.lines() {
            println!("    {line}");
        }
    }
    println!();
}

/// Marker glyph for a suggestion severity.
fn severity_marker(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Error => "✗".red().bold(),
        Severity::Success => "✓".green().bold(),
        Severity::Warning => "!".yellow().bold(),
        Severity::Info => "·".normal(),
    }
}
