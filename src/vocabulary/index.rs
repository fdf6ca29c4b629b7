// Fuzzy term lookup - rates words against the fixed interview vocabulary
// using bigram similarity, tolerant of speech-to-text mis-transcriptions

use strsim::sorensen_dice;

use super::terms::INTERVIEW_VOCABULARY;

/// Minimum similarity rating for a fuzzy hit (0.0 to 1.0). Shared by
/// transcript auto-correction and the classifier's fuzzy token counting.
pub const SIMILARITY_CUTOFF: f64 = 0.7;

/// Best vocabulary match for a word, with its similarity rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermMatch {
    /// The vocabulary entry that scored highest
    pub target: &'static str,
    /// Similarity rating in [0.0, 1.0]
    pub rating: f64,
}

/// Similarity index over the fixed interview vocabulary.
///
/// Ratings are normalized Sørensen-Dice bigram coefficients: 1.0 for an
/// exact match, 0.0 for no shared bigrams. Lookup is deterministic; the
/// earliest vocabulary entry wins ties.
#[derive(Debug, Clone, Copy)]
pub struct TermSimilarityIndex {
    terms: &'static [&'static str],
}

impl TermSimilarityIndex {
    pub fn new() -> Self {
        Self {
            terms: INTERVIEW_VOCABULARY,
        }
    }

    /// The vocabulary backing this index.
    pub fn terms(&self) -> &'static [&'static str] {
        self.terms
    }

    /// Find the vocabulary entry most similar to `word`.
    pub fn best_match(&self, word: &str) -> TermMatch {
        let mut best = TermMatch {
            target: "",
            rating: 0.0,
        };
        for &term in self.terms {
            let rating = sorensen_dice(word, term);
            if best.target.is_empty() || rating > best.rating {
                best = TermMatch { target: term, rating };
            }
        }
        best
    }

    /// Whether `word`'s best match clears the fuzzy-hit cutoff.
    pub fn is_fuzzy_hit(&self, word: &str) -> bool {
        self.best_match(word).rating > SIMILARITY_CUTOFF
    }
}

impl Default for TermSimilarityIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
