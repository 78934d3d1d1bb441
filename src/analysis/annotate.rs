// Inline prompt annotation — recognized keywords wrapped in tooltip markup.
//
// Spans are claimed on the source text, longest keyword first, so a shorter
// keyword can never rewrite text that is already inside an inserted span
// (e.g. "guitar" inside an "electric guitar" span). Stripping the tags and
// turning `<br>` back into newlines reproduces the input text exactly.

use crate::analysis::keywords::keyword_spans;
use crate::data::{format_label, StyleData};

/// Associations shown in a keyword's tooltip.
const TOOLTIP_ASSOCIATIONS: usize = 4;

/// Escape text for safe embedding in HTML attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Tooltip body for one keyword: its strongest associations, or a stock
/// phrase when the table has no entry.
fn tooltip_for(keyword: &str, data: &StyleData) -> String {
    let top = data.top_associations(keyword, TOOLTIP_ASSOCIATIONS);
    if top.is_empty() {
        return "No direct associations found.".to_string();
    }
    top.iter()
        .map(|(style, weight)| format!("• {}: {weight}", escape_html(&format_label(style))))
        .collect::<Vec<_>>()
        .join("&#10;")
}

/// Wrap every occurrence of the recognized keywords in tooltip spans and
/// substitute `<br>` for newlines.
pub fn annotate_prompt(
    prompt_text: &str,
    recognized_keywords: &[String],
    data: &StyleData,
) -> String {
    // Longest keyword first, so phrases claim their spans before the words
    // they contain get a chance to.
    let mut by_length: Vec<&String> = recognized_keywords.iter().collect();
    by_length.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let lower = prompt_text.to_ascii_lowercase();
    let mut claims: Vec<(usize, usize, &String)> = Vec::new();
    for keyword in by_length {
        for (start, end) in keyword_spans(&lower, keyword) {
            let overlaps = claims
                .iter()
                .any(|(s, e, _)| start < *e && *s < end);
            if !overlaps {
                claims.push((start, end, keyword));
            }
        }
    }
    claims.sort_by_key(|(start, _, _)| *start);

    let mut html = String::with_capacity(prompt_text.len());
    let mut cursor = 0;
    for (start, end, keyword) in claims {
        html.push_str(&prompt_text[cursor..start]);
        html.push_str(&format!(
            "<span class=\"highlight-keyword\" data-tooltip=\"{}\">{}</span>",
            tooltip_for(keyword, data),
            &prompt_text[start..end]
        ));
        cursor = end;
    }
    html.push_str(&prompt_text[cursor..]);

    html.replace('\n', "<br>")
}
