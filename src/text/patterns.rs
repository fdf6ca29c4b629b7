// Question-shape pattern library for transcript classification
// Compiled once on first use; all patterns are case-insensitive

use std::sync::OnceLock;

use regex::Regex;

/// Strong definition triggers. A match with a captured subject accepts the
/// utterance outright, bypassing keyword and fuzzy scoring.
const STRONG_TRIGGERS: &[&str] = &[
    r"(?i)define\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)definition\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)what\s+is\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)what\s+do\s+you\s+mean\s+by\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)meaning\s+of\s+([a-zA-Z0-9_.-]{3,})",
];

/// Bare trigger phrases with no subject. An utterance consisting only of
/// one of these is rejected outright.
const BARE_TRIGGERS: &[&str] = &[
    r"(?i)^define\s*$",
    r"(?i)^definition\s*$",
    r"(?i)^what\s+is\s*$",
    r"(?i)^what\s+do\s+you\s+mean\s+by\s*$",
    r"(?i)^meaning\s+of\s*$",
];

/// The broad question-shape library: canonical English question forms plus
/// casual and educational spoken variations.
const QUESTION_SHAPES: &[&str] = &[
    // Core English patterns
    r"(?i)what\s+(is|are|do|does|did|will|would|can|should)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)how\s+(do|does|did|will|would|can|should|to|we|it)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)why\s+(do|does|did|is|are|will|should|we|people)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)where\s+(is|can|do|does|should|can we)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)when\s+(do|does|did|should|to|can)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)can\s+(you|we)\s+(explain|tell|describe|show)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)could\s+(you|we)\s+(tell|explain|give)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)would\s+(you|we)\s+(say|consider|prefer)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)tell\s+(me\s+)?about\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)explain\s+(me\s+)?(about|how|what)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)describe\s+(me\s+)?(the|how|what|process)\s+([a-zA-Z0-9_.-]{3,})",
    // Casual spoken variations
    r"(?i)what's\s+(the\s+)?use\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)why\s+we\s+use\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)how\s+it\s+works\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)what\s+for\s+it\s+is\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)what\s+is\s+the\s+difference\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)difference\s+(between|of)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)compare\s+.*\s+(with|and|vs)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)can\s+i\s+(learn|get|use|do)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)is\s+(this|it|that)\s+(important|useful|needed)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)which\s+one\s+is\s+(better|good|faster)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)what\s+to\s+(choose|learn|study)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)how\s+to\s+(start|learn|prepare|crack)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)scope\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)career\s+in\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)interview\s+question\s+([a-zA-Z0-9_.-]{3,})",
    // Educational question styles
    r"(?i)define\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)definition\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)what\s+is\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)what\s+do\s+you\s+mean\s+by\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)meaning\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)explain\s+in\s+(short|detail|hindi|simple words)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)give\s+(an\s+)?example\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)write\s+a?\s+short\s+note\s+on\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)list\s+(out|the)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)types\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)advantages\s+and\s+disadvantages\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)pros\s+and\s+cons\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)merits\s+and\s+demerits\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)explain\s+with\s+(example|diagram|points)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)explain\s+step(\s+by\s+step|wise)?\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)difference\s+(between|of|in|with|among)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)compare\s+(with|and|between|of)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)write\s+(about|on|a\s+note\s+on|the\s+answer|the\s+explanation)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)note\s+(on|about|in)\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)future\s+scope\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)career\s+scope\s+of\s+([a-zA-Z0-9_.-]{3,})",
    r"(?i)job\s+scope\s+of\s+([a-zA-Z0-9_.-]{3,})",
    // Definition triggers with any non-empty subject
    r"(?i)define\s+[a-zA-Z0-9_.-]+",
    r"(?i)definition\s+of\s+[a-zA-Z0-9_.-]+",
    r"(?i)what\s+is\s+[a-zA-Z0-9_.-]+",
    r"(?i)what\s+do\s+you\s+mean\s+by\s+[a-zA-Z0-9_.-]+",
    r"(?i)meaning\s+of\s+[a-zA-Z0-9_.-]+",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static pattern"))
        .collect()
}

pub(crate) fn strong_trigger_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| compile(STRONG_TRIGGERS))
}

pub(crate) fn bare_trigger_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| compile(BARE_TRIGGERS))
}

pub(crate) fn question_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| compile(QUESTION_SHAPES))
}
