// Keyword matching against the fixed style vocabulary.
//
// Matching is exact-vocabulary only: a style matches when it appears in the
// text as a whole token (or, for multi-word styles, a contiguous phrase),
// case-insensitive. Boundary rule: `-` and `&` count as token-internal
// characters, so "pop" does not match inside "popular" or "k-pop". Regex
// word boundaries cannot express that (and the regex crates have no
// lookbehind), hence the manual scanner.

use std::collections::BTreeSet;

/// Characters that can appear inside a vocabulary token. A match must not
/// be adjacent to one of these.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '&'
}

/// All boundary-respecting occurrences of `keyword` in `text_lower`, as
/// byte ranges. Both arguments must already be lowercase.
pub(crate) fn keyword_spans(text_lower: &str, keyword: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    if keyword.is_empty() {
        return spans;
    }

    let mut search_from = 0;
    while let Some(offset) = text_lower[search_from..].find(keyword) {
        let start = search_from + offset;
        let end = start + keyword.len();

        let boundary_before = text_lower[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_token_char(c));
        let boundary_after = text_lower[end..]
            .chars()
            .next()
            .map_or(true, |c| !is_token_char(c));

        if boundary_before && boundary_after {
            spans.push((start, end));
        }
        // Advance one character, not one keyword length: "pop pop" needs the
        // scan to reach the second occurrence even after a failed boundary.
        search_from = start + text_lower[start..].chars().next().map_or(1, |c| c.len_utf8());
    }
    spans
}

/// Extract the vocabulary terms present in `text` as whole-token matches.
///
/// Case-insensitive, duplicates collapsed, sorted for determinism. Returns
/// an empty vector (never an error) when nothing matches; whether that is a
/// problem is the caller's call.
pub fn extract_keywords(text: &str, vocabulary: &BTreeSet<String>) -> Vec<String> {
    // ASCII-only lowering keeps byte offsets identical to the source text,
    // which the annotator relies on. The vocabulary itself is ASCII.
    let lower = text.to_ascii_lowercase();
    let mut found = BTreeSet::new();
    for style in vocabulary {
        if !keyword_spans(&lower, style).is_empty() {
            found.insert(style.clone());
        }
    }
    found.into_iter().collect()
}
