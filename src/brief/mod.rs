// Creative brief composition — pure templating, no inference.
//
// The brief is the structured hand-off to the external prompt polisher: it
// gathers the style personalities, the strongest associated descriptors, and
// any user constraints into a deterministic text block. Missing personality
// records degrade to "N/A"; nothing here can fail.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::data::personality::{
    personality, StylePersonality, INSTRUMENT_KEYWORDS, MOOD_KEYWORDS, VOCAL_KEYWORDS,
};
use crate::data::{format_label, StyleData};
use crate::graph::bridge_styles;

/// Associations consulted when picking a brief's moods/instruments/vocals.
const DESCRIPTOR_POOL: usize = 15;

/// System instruction shipped with every polishing request. It encodes the
/// narrative, punctuation, and production-description rules the polished
/// prompt must follow.
pub const SYSTEM_INSTRUCTION: &str = r#"You are an expert AI music prompt engineer specializing in Suno v4.5+. Your task is to transform a structured creative brief into a perfect, narrative-style prompt for Suno. You must adhere to the following strict rules:

1.  **Narrative First:** Do not list features. Write a cohesive, descriptive paragraph that tells the story of the song. Describe the emotional arc and how the track evolves from beginning to end.

2.  **Punctuation is Code:**
    *   You MUST use periods (`.`) to separate distinct conceptual blocks (e.g., Genre/Feel, Instrumentation, Vocals, Production). A good prompt has 3-5 distinct sentences.
    *   Within a single block, you MUST NOT use commas to separate descriptors. Instead, you MUST connect them with 'and' or 'with' to form a continuous, flowing phrase.

3.  **Creative Synthesis:** When the brief presents emotionally or stylistically contradictory concepts, your primary goal is to find a creative, believable fusion. Propose a narrative or aesthetic that resolves the paradox. For instance, if a brief combines a melancholic mood with an energetic tempo, invent a scenario that makes sense of this, such as 'a cathartic dance track about overcoming grief'. Do not simply state the contradiction. For a single style, expand upon its core identity with vivid, evocative language.

4.  **Tag Dilution Strategy:** Incorporate multiple related adjectives and descriptive terms from the brief to give the model a rich semantic field. This prevents over-optimizing on a single, restrictive keyword and encourages drawing from a wider range of training data. Ensure all terms fit naturally within the narrative.

5.  **Implicit Structure:** The final prompt should implicitly cover four key areas in a flowing narrative: 1. Overall Genre and Mood. 2. Key Instrumentation and Texture. 3. Vocal Style and Performance. 4. Production and Mastering.

6.  **Evocative Production Description:** The final sentence of your prompt MUST be a detailed, professional description of the audio mastering and production, synthesized from the song's genre and mood rather than a stock phrase. Describe the sonic qualities from an audio engineer's perspective: frequency balance and clarity, low-end character, stereo image and space, and how the vocals are treated and placed within the mix.

7.  **Handle Creative Constraints:** When the brief provides a "Creative Goal" to steer away from certain qualities, do not simply omit words. Actively construct the narrative using contrasting and opposing descriptive language: build the core of the prompt from the "Emphasize" list and describe sonic textures in opposition to the "Steer Away From" list."#;

/// Unique adjectives across a set of styles, sorted for determinism.
fn adjectives_for<'a>(styles: impl IntoIterator<Item = &'a str>) -> BTreeSet<&'static str> {
    let mut adjectives = BTreeSet::new();
    for style in styles {
        if let Some(p) = personality(style) {
            adjectives.extend(p.adjectives.iter().copied());
        }
    }
    adjectives
}

fn join_or_na<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> String {
    let joined: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    if joined.is_empty() {
        "N/A".to_string()
    } else {
        joined.join(", ")
    }
}

/// Human-readable rendering of a personality record.
fn personality_line(record: Option<&StylePersonality>) -> String {
    match record {
        Some(p) => {
            let mut line = format!("{}; energy: {}", p.adjectives.join(", "), p.energy);
            if let Some(vocal) = p.vocal_style {
                write!(line, "; vocal style: {vocal}").ok();
            }
            line
        }
        None => "N/A".to_string(),
    }
}

fn direction_section(creative_direction: Option<&str>) -> String {
    match creative_direction.map(str::trim) {
        Some(direction) if !direction.is_empty() => {
            format!("\n**Mandatory Creative Direction:** {direction}")
        }
        _ => String::new(),
    }
}

/// Compose the brief for a single style.
pub fn single_style_brief(
    primary: &str,
    negative_keywords: &BTreeSet<String>,
    creative_direction: Option<&str>,
    data: &StyleData,
) -> String {
    let direction = direction_section(creative_direction);

    if !negative_keywords.is_empty() {
        let positive = adjectives_for([primary]);
        let negative = adjectives_for(negative_keywords.iter().map(String::as_str));
        let avoided = negative_keywords
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        return format!(
            "**Primary Style:** {primary}\n\
             **Creative Goal:** To generate a '{primary}' prompt that actively avoids the sensibilities of '{avoided}'.\n\
             **Emphasize These '{label}' Qualities:** {emphasize}\n\
             **Steer Away From These Qualities:** {steer}{direction}\n\
             **Task:** Based on the data above, write an optimal Suno 4.5+ style prompt. Your primary goal is to find a creative angle that embodies the core '{primary}' qualities while actively contrasting with the specified negative qualities. Follow all rules from your system instruction.",
            label = format_label(primary),
            emphasize = join_or_na(positive),
            steer = join_or_na(negative),
        );
    }

    let top: Vec<&str> = data
        .top_associations(primary, DESCRIPTOR_POOL)
        .into_iter()
        .map(|(style, _)| style)
        .collect();
    let moods: Vec<&str> = top
        .iter()
        .copied()
        .filter(|s| MOOD_KEYWORDS.contains(s))
        .take(3)
        .collect();
    let instruments: Vec<&str> = top
        .iter()
        .copied()
        .filter(|s| INSTRUMENT_KEYWORDS.contains(s))
        .take(3)
        .collect();
    let vocals: Vec<&str> = top
        .iter()
        .copied()
        .filter(|s| VOCAL_KEYWORDS.contains(s))
        .take(2)
        .collect();

    format!(
        "**Primary Style:** {primary}\n\
         **Personality:** {personality}\n\
         **Key Associated Moods:** {moods}\n\
         **Key Associated Instruments:** {instruments}\n\
         **Key Associated Vocals:** {vocals}{direction}\n\
         **Task:** Based on the data above, write an optimal Suno 4.5+ style prompt. Your goal is to expand upon the core identity of the primary style, using the associated concepts to create a rich, vivid, and compelling narrative description for a song. Follow all rules from your system instruction.",
        personality = personality_line(personality(primary)),
        moods = join_or_na(moods),
        instruments = join_or_na(instruments),
        vocals = join_or_na(vocals),
    )
}

/// Compose the brief for a two-style fusion.
pub fn fusion_brief(
    primary: &str,
    secondary: &str,
    negative_keywords: &BTreeSet<String>,
    creative_direction: Option<&str>,
    data: &StyleData,
) -> String {
    let direction = direction_section(creative_direction);
    let combined = adjectives_for([primary, secondary]);

    if !negative_keywords.is_empty() {
        let negative = adjectives_for(negative_keywords.iter().map(String::as_str));
        let avoided = negative_keywords
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        return format!(
            "**Primary Style 1:** {primary}\n\
             **Primary Style 2:** {secondary}\n\
             **Creative Goal:** To fuse '{primary}' and '{secondary}' while actively avoiding the sensibilities of '{avoided}'.\n\
             **Emphasize These Combined Qualities:** {emphasize}\n\
             **Steer Away From These Qualities:** {steer}{direction}\n\
             **Task:** Based on the data above, write an optimal Suno 4.5+ style prompt. Your primary goal is to find a creative angle to fuse the two styles, resolving their contradictions into a believable and compelling musical idea, while actively contrasting with the specified negative qualities. Follow all rules from your system instruction.",
            emphasize = join_or_na(combined),
            steer = join_or_na(negative),
        );
    }

    let bridges = bridge_styles(primary, secondary, data);
    let bridge_line = if bridges.is_empty() {
        "None found, a true experimental fusion.".to_string()
    } else {
        bridges.join(", ")
    };

    format!(
        "**Primary Style 1:** {primary}\n\
         *   **Personality:** {p1}\n\
         \n\
         **Primary Style 2:** {secondary}\n\
         *   **Personality:** {p2}\n\
         \n\
         **Contradiction to Resolve:** The core challenge is to blend the potentially conflicting personalities, moods, and aesthetics of {primary} and {secondary}.\n\
         \n\
         **Bridge Nodes (Shared Influences):** {bridge_line}\n\
         **Combined Adjectives to Inspire Fusion:** {adjectives}{direction}\n\
         \n\
         **Task:** Based on the data above, write an optimal Suno 4.5+ style prompt following all rules from your system instruction. Your primary goal is to find a creative angle to fuse the two styles, resolving their contradictions into a believable and compelling musical idea.",
        p1 = personality_line(personality(primary)),
        p2 = personality_line(personality(secondary)),
        adjectives = join_or_na(combined),
    )
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
    fn single_brief_lists_descriptor_picks() {
        let data = data_from(&[(
            "rock",
            &[
                ("energetic", 90.0),
                ("electric guitar", 80.0),
                ("male vocals", 70.0),
                ("metal", 60.0),
            ],
        )]);
        let brief = single_style_brief("rock", &BTreeSet::new(), None, &data);
        assert!(brief.contains("**Primary Style:** rock"));
        assert!(brief.contains("**Key Associated Moods:** energetic"));
        assert!(brief.contains("**Key Associated Instruments:** electric guitar"));
        assert!(brief.contains("**Key Associated Vocals:** male vocals"));
        assert!(brief.contains("gritty"));
    }

    #[test]
    fn unknown_personality_falls_back_to_na() {
        let data = data_from(&[("zydeco", &[])]);
        let brief = single_style_brief("zydeco", &BTreeSet::new(), None, &data);
        assert!(brief.contains("**Personality:** N/A"));
        assert!(brief.contains("**Key Associated Moods:** N/A"));
    }

    #[test]
    fn negatives_switch_to_the_steering_template() {
        let data = data_from(&[("rock", &[("metal", 10.0)])]);
        let negatives: BTreeSet<String> = ["pop".to_string()].into();
        let brief = single_style_brief("rock", &negatives, None, &data);
        assert!(brief.contains("**Creative Goal:**"));
        assert!(brief.contains("actively avoids the sensibilities of 'pop'"));
        // Pop's adjectives land in the steer-away list.
        assert!(brief.contains("catchy"));
    }

    #[test]
    fn creative_direction_is_injected_when_present() {
        let data = data_from(&[("rock", &[("metal", 10.0)])]);
        let brief =
            single_style_brief("rock", &BTreeSet::new(), Some("  a guitar solo  "), &data);
        assert!(brief.contains("**Mandatory Creative Direction:** a guitar solo"));

        let without = single_style_brief("rock", &BTreeSet::new(), Some("   "), &data);
        assert!(!without.contains("Mandatory Creative Direction"));
    }

    #[test]
    fn fusion_brief_reports_bridges_or_fallback() {
        let data = data_from(&[
            ("rock", &[("synthwave", 40.0), ("metal", 90.0)]),
            ("electronic", &[("synthwave", 60.0), ("techno", 80.0)]),
        ]);
        let brief = fusion_brief("rock", "electronic", &BTreeSet::new(), None, &data);
        assert!(brief.contains("**Bridge Nodes (Shared Influences):** synthwave"));

        let disjoint = data_from(&[
            ("rock", &[("metal", 90.0)]),
            ("electronic", &[("techno", 80.0)]),
        ]);
        let brief = fusion_brief("rock", "electronic", &BTreeSet::new(), None, &disjoint);
        assert!(brief.contains("None found, a true experimental fusion."));
    }

    #[test]
    fn briefs_are_deterministic() {
        let data = data_from(&[("rock", &[("metal", 10.0)])]);
        let negatives: BTreeSet<String> = ["edm".to_string(), "pop".to_string()].into();
        let a = fusion_brief("rock", "jazz", &negatives, Some("night drive"), &data);
        let b = fusion_brief("rock", "jazz", &negatives, Some("night drive"), &data);
        assert_eq!(a, b);
        // Sorted negative listing.
        assert!(a.contains("'edm, pop'"));
    }
}
