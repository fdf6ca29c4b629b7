// Heuristic question classifier - decides whether a noisy transcript is an
// interview-style question worth answering

use crate::vocabulary::TermSimilarityIndex;

use super::patterns::{bare_trigger_patterns, question_patterns, strong_trigger_patterns};

/// Utterances shorter than this are never questions.
pub const MIN_UTTERANCE_LEN: usize = 5;

/// Accept when at least this many vocabulary entries occur as substrings.
pub const KEYWORD_HIT_THRESHOLD: usize = 2;

/// Accept when at least this many tokens fuzzy-match the vocabulary.
pub const FUZZY_HIT_THRESHOLD: usize = 2;

/// Fixed-heuristic relevance classifier.
///
/// Combines exact pattern/substring matching (precise, but brittle against
/// transcription noise) with per-token fuzzy matching (tolerant of
/// mis-transcriptions). Strong definition triggers accept unconditionally;
/// a bare trigger with no subject rejects unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionClassifier {
    index: TermSimilarityIndex,
}

impl QuestionClassifier {
    pub fn new() -> Self {
        Self {
            index: TermSimilarityIndex::new(),
        }
    }

    /// Binary verdict: is `text` an interview-style question?
    pub fn is_question(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        let lower = lower.trim();

        if lower.len() < MIN_UTTERANCE_LEN {
            return false;
        }

        // A strong trigger with a real subject overrides everything below
        for pattern in strong_trigger_patterns() {
            if let Some(caps) = pattern.captures(lower) {
                if caps.get(1).is_some_and(|m| !m.as_str().is_empty()) {
                    return true;
                }
            }
        }

        // A lone trigger word is not a real question
        if bare_trigger_patterns().iter().any(|p| p.is_match(lower)) {
            return false;
        }

        if question_patterns().iter().any(|p| p.is_match(lower)) {
            return true;
        }

        let keyword_hits = self
            .index
            .terms()
            .iter()
            .filter(|term| lower.contains(*term))
            .count();
        if keyword_hits >= KEYWORD_HIT_THRESHOLD {
            return true;
        }

        let fuzzy_hits = lower
            .split_whitespace()
            .filter(|word| self.index.is_fuzzy_hit(word))
            .count();
        fuzzy_hits >= FUZZY_HIT_THRESHOLD
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
