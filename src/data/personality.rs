// Hand-curated style personalities and the fixed descriptor keyword sets.
//
// The personality table maps style keywords to their intrinsic semantic
// qualities. It is reference data for the creative brief composer only — it
// is not derived from the co-occurrence table, and styles without an entry
// are tolerated everywhere (the composer falls back to generic phrasing).

/// Intrinsic qualities of one style, used when composing creative briefs.
#[derive(Debug, Clone, Copy)]
pub struct StylePersonality {
    /// Words describing the style's texture and feel.
    pub adjectives: &'static [&'static str],
    /// Short phrase describing the typical mood, tempo, or dynamic arc.
    pub energy: &'static str,
    /// Common vocal performance for the style, when one is characteristic.
    pub vocal_style: Option<&'static str>,
}

/// Look up the personality record for a style, if one is curated.
pub fn personality(style: &str) -> Option<&'static StylePersonality> {
    PERSONALITIES
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, p)| p)
}

/// Mood descriptors recognized when assembling a brief's "associated moods".
pub const MOOD_KEYWORDS: &[&str] = &[
    "aggressive",
    "ambient",
    "anthemic",
    "atmospheric",
    "chill",
    "cinematic",
    "dark",
    "deep",
    "dramatic",
    "dreamy",
    "emotional",
    "energetic",
    "epic",
    "ethereal",
    "futuristic",
    "groovy",
    "heartfelt",
    "intense",
    "melancholic",
    "mellow",
    "powerful",
    "psychedelic",
    "romantic",
    "sad",
    "smooth",
    "upbeat",
    "uplifting",
];

/// Instrument descriptors recognized when assembling a brief.
pub const INSTRUMENT_KEYWORDS: &[&str] = &[
    "acoustic guitar",
    "bass",
    "drum",
    "electric guitar",
    "flute",
    "guitar",
    "orchestral",
    "piano",
    "synth",
    "violin",
];

/// Vocal descriptors recognized when assembling a brief.
pub const VOCAL_KEYWORDS: &[&str] = &[
    "female singer",
    "female vocals",
    "female voice",
    "gospel",
    "male vocals",
    "male voice",
    "opera",
    "vocaloid",
];

static PERSONALITIES: &[(&str, StylePersonality)] = &[
    (
        "pop",
        StylePersonality {
            adjectives: &["catchy", "polished", "upbeat", "melodic", "radio-ready"],
            energy: "an uplifting build to a memorable chorus",
            vocal_style: Some("clean, polished, and layered"),
        },
    ),
    (
        "rock",
        StylePersonality {
            adjectives: &["driving", "gritty", "energetic", "rebellious"],
            energy: "raw and powerful",
            vocal_style: Some("powerful and anthemic"),
        },
    ),
    (
        "metal",
        StylePersonality {
            adjectives: &["aggressive", "heavy", "distorted", "powerful", "technical"],
            energy: "driving and relentless high-intensity",
            vocal_style: Some("ranging from aggressive growls to soaring clean vocals"),
        },
    ),
    (
        "electronic",
        StylePersonality {
            adjectives: &["pulsating", "synthetic", "intricate", "futuristic"],
            energy: "rhythmic and evolving",
            vocal_style: Some("processed or sampled, often with effects"),
        },
    ),
    (
        "hip hop",
        StylePersonality {
            adjectives: &["groovy", "sample-based", "rhythmic", "laid-back"],
            energy: "a head-nodding beat with a strong groove",
            vocal_style: Some("a smooth, conversational flow"),
        },
    ),
    (
        "acoustic",
        StylePersonality {
            adjectives: &["intimate", "organic", "unplugged", "warm", "heartfelt"],
            energy: "gentle and reflective",
            vocal_style: Some("raw and emotional"),
        },
    ),
    (
        "jazz",
        StylePersonality {
            adjectives: &[
                "smooth",
                "improvisational",
                "complex",
                "sophisticated",
                "soulful",
            ],
            energy: "a cool, sophisticated, and swinging rhythm",
            vocal_style: Some("smooth and soulful, with opportunities for scat improvisation"),
        },
    ),
    (
        "funk",
        StylePersonality {
            adjectives: &["groovy", "rhythmic", "tight", "syncopated", "energetic"],
            energy: "an infectious and highly danceable groove",
            vocal_style: Some("energetic and soulful, often with chanted phrases"),
        },
    ),
    (
        "country",
        StylePersonality {
            adjectives: &["twangy", "heartfelt", "storytelling", "rustic"],
            energy: "a narrative-driven and honest feel",
            vocal_style: Some("clear and earnest, often with a distinct twang or drawl"),
        },
    ),
    (
        "r&b",
        StylePersonality {
            adjectives: &["smooth", "soulful", "sensual", "rhythmic", "modern"],
            energy: "a slick, polished groove with emotional weight",
            vocal_style: Some("silky smooth, with impressive vocal runs and harmonies"),
        },
    ),
    (
        "soul",
        StylePersonality {
            adjectives: &["warm", "emotive", "heartfelt", "passionate", "vintage"],
            energy: "a deep, emotional groove powered by a tight rhythm section",
            vocal_style: Some("powerful, passionate, and full of feeling"),
        },
    ),
    (
        "blues",
        StylePersonality {
            adjectives: &["gritty", "mournful", "raw", "expressive", "twelve-bar"],
            energy: "a cyclical, heartfelt, and storytelling rhythm",
            vocal_style: Some("raw, soulful, and full of grit and emotion"),
        },
    ),
    (
        "trap",
        StylePersonality {
            adjectives: &["rhythmic", "bass-heavy", "syncopated", "modern", "dark"],
            energy: "driven by deep 808 kick drums and complex, skittering hi-hat patterns",
            vocal_style: Some("often auto-tuned, rhythmic, with a mumble or melodic flow"),
        },
    ),
    (
        "ballad",
        StylePersonality {
            adjectives: &["slow", "narrative", "emotional", "sentimental", "sweeping"],
            energy: "a slow tempo building to a powerful, emotional chorus",
            vocal_style: Some("clear, emotional storytelling, often with a wide dynamic range"),
        },
    ),
    (
        "indie",
        StylePersonality {
            adjectives: &["independent", "raw", "DIY", "alternative", "authentic"],
            energy: "a less polished, more authentic sound than mainstream music",
            vocal_style: Some("varied, but often more personal and less produced"),
        },
    ),
    (
        "dark",
        StylePersonality {
            adjectives: &["brooding", "ominous", "gothic", "somber", "heavy"],
            energy: "a tense and melancholic atmosphere",
            vocal_style: Some("deep, mournful, or menacing"),
        },
    ),
    (
        "epic",
        StylePersonality {
            adjectives: &["massive", "orchestral", "heroic", "sweeping", "grand"],
            energy: "a constant build to a grand climax",
            vocal_style: Some("soaring and operatic, often with a choir"),
        },
    ),
    (
        "emotional",
        StylePersonality {
            adjectives: &[
                "expressive",
                "moving",
                "passionate",
                "heart-on-sleeve",
                "poignant",
            ],
            energy: "a dynamic arc that builds to a powerful emotional peak",
            vocal_style: Some("full of feeling, from a gentle whisper to a powerful belt"),
        },
    ),
    (
        "aggressive",
        StylePersonality {
            adjectives: &[
                "harsh",
                "abrasive",
                "confrontational",
                "intense",
                "furious",
            ],
            energy: "a relentless and high-energy sonic assault",
            vocal_style: Some("shouted, growled, snarled, or rapped with force"),
        },
    ),
    (
        "atmospheric",
        StylePersonality {
            adjectives: &["textural", "drifting", "spacious", "immersive"],
            energy: "a soundscape that prioritizes mood over a strong beat",
            vocal_style: None,
        },
    ),
    (
        "sad",
        StylePersonality {
            adjectives: &[
                "mournful",
                "somber",
                "tearful",
                "melancholy",
                "heartbreaking",
            ],
            energy: "a slow and sorrowful pace",
            vocal_style: Some("sorrowful and full of pathos"),
        },
    ),
    (
        "dreamy",
        StylePersonality {
            adjectives: &["hazy", "surreal", "drifting", "nostalgic", "shimmering"],
            energy: "a gentle, floating atmosphere",
            vocal_style: Some("soft, washed-out, and ethereal"),
        },
    ),
    (
        "powerful",
        StylePersonality {
            adjectives: &["strong", "commanding", "impactful", "forceful", "dynamic"],
            energy: "a driving and assertive presence with a wide dynamic range",
            vocal_style: Some("strong, confident, and resonant"),
        },
    ),
    (
        "uplifting",
        StylePersonality {
            adjectives: &["inspiring", "hopeful", "positive", "soaring", "joyful"],
            energy: "a build towards a euphoric and optimistic climax",
            vocal_style: Some("soaring and inspirational, often with layered harmonies"),
        },
    ),
    (
        "chill",
        StylePersonality {
            adjectives: &["relaxed", "mellow", "laid-back", "smooth", "easygoing"],
            energy: "a slow, steady, and relaxing groove",
            vocal_style: Some("soft and gentle, often with a relaxed delivery"),
        },
    ),
    (
        "romantic",
        StylePersonality {
            adjectives: &["passionate", "intimate", "sentimental", "loving", "sensual"],
            energy: "a warm and gentle mood, often building to a passionate peak",
            vocal_style: Some("soft, intimate, and full of heartfelt emotion"),
        },
    ),
    (
        "energetic",
        StylePersonality {
            adjectives: &[
                "high-energy",
                "fast-paced",
                "vibrant",
                "dynamic",
                "propulsive",
            ],
            energy: "a driving, propulsive rhythm that invites movement",
            vocal_style: None,
        },
    ),
    (
        "melancholic",
        StylePersonality {
            adjectives: &["wistful", "somber", "reflective", "downcast", "plaintive"],
            energy: "a gentle and sorrowful atmosphere",
            vocal_style: Some("subdued, mournful, and full of longing"),
        },
    ),
    (
        "anthemic",
        StylePersonality {
            adjectives: &["big", "singalong", "unifying", "uplifting", "epic"],
            energy: "a build-up to a massive, crowd-pleasing chorus",
            vocal_style: Some("powerful, designed for a stadium to sing along"),
        },
    ),
    (
        "cinematic",
        StylePersonality {
            adjectives: &[
                "soundtrack-like",
                "sweeping",
                "atmospheric",
                "orchestral",
                "grand",
            ],
            energy: "a track that tells a story and evokes strong visual imagery",
            vocal_style: None,
        },
    ),
    (
        "ethereal",
        StylePersonality {
            adjectives: &[
                "airy",
                "floating",
                "reverb-drenched",
                "dream-like",
                "shimmering",
            ],
            energy: "gentle and atmospheric",
            vocal_style: Some("soft, breathy, and reverb-drenched"),
        },
    ),
    (
        "hard rock",
        StylePersonality {
            adjectives: &[
                "anthemic",
                "powerful",
                "riff-based",
                "swaggering",
                "gritty",
            ],
            energy: "a mid-tempo, powerful stomp driven by electric guitar riffs",
            vocal_style: Some("strong, raspy, and high-energy"),
        },
    ),
    (
        "synthwave",
        StylePersonality {
            adjectives: &[
                "retro",
                "neon-drenched",
                "nostalgic",
                "futuristic",
                "80s-inspired",
            ],
            energy: "a steady, cinematic night-driving pulse",
            vocal_style: Some("often instrumental, but can include reverb-drenched, emotive vocals"),
        },
    ),
    (
        "dance",
        StylePersonality {
            adjectives: &["rhythmic", "four-on-the-floor", "club-ready", "energetic"],
            energy: "a strong, consistent beat designed for dancing",
            vocal_style: None,
        },
    ),
    (
        "heavy metal",
        StylePersonality {
            adjectives: &["heavy", "fast", "aggressive", "powerful", "riff-driven"],
            energy: "a fast-paced and relentless gallop",
            vocal_style: Some("high-pitched and soaring, often operatic"),
        },
    ),
    (
        "lo-fi",
        StylePersonality {
            adjectives: &["chill", "nostalgic", "warm", "hazy", "relaxed"],
            energy: "a calm and steady, non-intrusive beat, often with vinyl crackle",
            vocal_style: Some("often instrumental, or featuring soft, sampled vocal snippets"),
        },
    ),
    (
        "techno",
        StylePersonality {
            adjectives: &[
                "driving",
                "minimal",
                "hypnotic",
                "industrial",
                "repetitive",
            ],
            energy: "a relentless and repetitive pulse",
            vocal_style: Some("often instrumental, or featuring sparse, processed vocal chops"),
        },
    ),
    (
        "punk",
        StylePersonality {
            adjectives: &["raw", "fast", "rebellious", "stripped-down", "energetic"],
            energy: "a chaotic and high-octane burst",
            vocal_style: Some("shouted, sneering, and anti-authoritarian"),
        },
    ),
    (
        "reggae",
        StylePersonality {
            adjectives: &[
                "syncopated",
                "laid-back",
                "off-beat",
                "bass-heavy",
                "skanking",
            ],
            energy: "a relaxed, swaying one-drop rhythm",
            vocal_style: Some("melodic and rhythmic chanting with a distinct patois"),
        },
    ),
    (
        "grunge",
        StylePersonality {
            adjectives: &["gritty", "sludgy", "apathetic", "distorted", "raw"],
            energy: "a raw and heavy dirge with a sense of disillusionment",
            vocal_style: Some("angsty, raw, and often gravelly or strained"),
        },
    ),
    (
        "house",
        StylePersonality {
            adjectives: &[
                "four-on-the-floor",
                "deep",
                "soulful",
                "hypnotic",
                "danceable",
            ],
            energy: "a hypnotic and danceable groove",
            vocal_style: Some("soulful, often diva-like vocal samples or hooks"),
        },
    ),
    (
        "k-pop",
        StylePersonality {
            adjectives: &[
                "hyper-polished",
                "high-energy",
                "choreography-driven",
                "multi-faceted",
                "slick",
            ],
            energy: "a blend of pop, rap, and electronic sections with dynamic structure shifts",
            vocal_style: Some("a mix of clean, precise singing and sharp, rhythmic rap verses"),
        },
    ),
    (
        "j-pop",
        StylePersonality {
            adjectives: &[
                "hyper-melodic",
                "upbeat",
                "polished",
                "eclectic",
                "energetic",
            ],
            energy: "a fast-paced and highly produced blend of pop, rock, and electronic styles",
            vocal_style: Some("clean, high-pitched, and energetic, sung in Japanese"),
        },
    ),
    (
        "disco",
        StylePersonality {
            adjectives: &[
                "groovy",
                "four-on-the-floor",
                "orchestral",
                "danceable",
                "lush",
            ],
            energy: "an infectious, upbeat dance rhythm with lush string and horn sections",
            vocal_style: Some("soaring, soulful, and often featuring falsetto"),
        },
    ),
    (
        "trance",
        StylePersonality {
            adjectives: &[
                "hypnotic",
                "euphoric",
                "melodic",
                "progressive",
                "arpeggiated",
            ],
            energy: "a building, evolving track with a melodic breakdown and uplifting climax",
            vocal_style: Some("often features ethereal, reverb-drenched female vocal snippets"),
        },
    ),
    (
        "gospel",
        StylePersonality {
            adjectives: &[
                "uplifting",
                "soulful",
                "harmonious",
                "praise-filled",
                "choral",
            ],
            energy: "a powerful build of collective joy and spirit",
            vocal_style: Some("powerful, soulful lead vocals with a large, dynamic choir"),
        },
    ),
    (
        "electropop",
        StylePersonality {
            adjectives: &["synth-heavy", "catchy", "danceable", "modern", "slick"],
            energy: "pop music where the primary instrumentation is synthesizers",
            vocal_style: Some("polished and melodic, often with some light processing"),
        },
    ),
    (
        "orchestral",
        StylePersonality {
            adjectives: &["grand", "sweeping", "symphonic", "lush", "majestic"],
            energy: "a full dynamic range from pianissimo to fortissimo",
            vocal_style: Some("operatic soprano or tenor, or a full classical choir"),
        },
    ),
    (
        "classical",
        StylePersonality {
            adjectives: &[
                "symphonic",
                "ornate",
                "complex",
                "timeless",
                "contrapuntal",
            ],
            energy: "a complex and dynamic arrangement for an orchestra or solo instrument",
            vocal_style: Some("operatic, choral, and highly trained"),
        },
    ),
    (
        "piano",
        StylePersonality {
            adjectives: &[
                "emotive",
                "elegant",
                "melancholic",
                "delicate",
                "percussive",
            ],
            energy: "ranging from sparse and sad to powerfully resonant",
            vocal_style: None,
        },
    ),
    (
        "electric guitar",
        StylePersonality {
            adjectives: &[
                "distorted",
                "riff-driven",
                "searing",
                "overdriven",
                "clean-toned",
            ],
            energy: "carrying powerful rock riffs or soaring, melodic lead solos",
            vocal_style: None,
        },
    ),
    (
        "acoustic guitar",
        StylePersonality {
            adjectives: &[
                "fingerpicked",
                "strummed",
                "organic",
                "intimate",
                "unplugged",
            ],
            energy: "providing a warm rhythmic or melodic foundation for a song",
            vocal_style: None,
        },
    ),
    (
        "synth",
        StylePersonality {
            adjectives: &[
                "synthetic",
                "versatile",
                "textural",
                "atmospheric",
                "arpeggiated",
            ],
            energy: "providing pads, leads, bass, or complex rhythmic patterns",
            vocal_style: None,
        },
    ),
    (
        "edm",
        StylePersonality {
            adjectives: &[
                "electronic",
                "dance",
                "club-ready",
                "high-energy",
                "synthetic",
            ],
            energy: "electronic music designed for festivals and clubs, often featuring a 'drop'",
            vocal_style: None,
        },
    ),
    (
        "female vocals",
        StylePersonality {
            adjectives: &["feminine", "harmonized", "layered", "soprano"],
            energy: "a focus on female vocal parts, including leads and harmonies",
            vocal_style: Some("often implies multiple female singers or layered vocal tracks"),
        },
    ),
    (
        "male vocals",
        StylePersonality {
            adjectives: &["masculine", "harmonized", "layered", "baritone"],
            energy: "a focus on male vocal parts, including leads and harmonies",
            vocal_style: Some("often implies multiple male singers or layered vocal tracks"),
        },
    ),
    (
        "vocaloid",
        StylePersonality {
            adjectives: &[
                "synthetic",
                "digital",
                "anime-style",
                "futuristic",
                "high-pitched",
            ],
            energy: "vocals provided by singing synthesizer software",
            vocal_style: Some("perfectly pitched, often fast-paced and distinctly non-human"),
        },
    ),
    (
        "opera",
        StylePersonality {
            adjectives: &[
                "classical",
                "dramatic",
                "virtuosic",
                "theatrical",
                "powerful",
            ],
            energy: "a grand, theatrical performance",
            vocal_style: Some("highly trained, powerful, and unamplified classical singing"),
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_style_has_personality() {
        let p = personality("rock").unwrap();
        assert!(p.adjectives.contains(&"gritty"));
        assert!(p.vocal_style.is_some());
    }

    #[test]
    fn unknown_style_is_none() {
        assert!(personality("bagpipe-core").is_none());
    }

    #[test]
    fn keyword_sets_are_lowercase() {
        for kw in MOOD_KEYWORDS.iter().chain(INSTRUMENT_KEYWORDS).chain(VOCAL_KEYWORDS) {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }
}
