// Transcript cleanup - strips speech filler and junk characters, and
// auto-corrects near-miss vocabulary terms in raw transcripts

use std::sync::OnceLock;

use regex::Regex;

use crate::vocabulary::{TermSimilarityIndex, SIMILARITY_CUTOFF};

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

fn trailing_question_marks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\?+$").expect("static pattern"))
}

fn leading_filler() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(um|uh|well|so|okay|like|hmm|actually|basically)\s+")
            .expect("static pattern")
    })
}

fn junk_characters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9 ?]").expect("static pattern"))
}

/// Clean a raw utterance for classification and display.
///
/// Collapses whitespace, reduces a trailing run of `?` to one, strips a
/// single leading filler token (case-insensitive), and removes characters
/// outside `[a-zA-Z0-9 ?]`. Pure; empty input yields an empty string, and
/// already-clean input is a fixed point.
pub fn normalize(raw: &str) -> String {
    let text = raw.trim();
    let text = whitespace_runs().replace_all(text, " ");
    let text = trailing_question_marks().replace(&text, "?");
    let text = leading_filler().replace(&text, "");
    let text = junk_characters().replace_all(&text, "");
    text.trim().to_string()
}

/// Replace each whitespace-separated token with its best vocabulary match
/// when the similarity rating clears [`SIMILARITY_CUTOFF`], leaving other
/// tokens untouched. Runs on raw transcripts as they stream in, before
/// [`normalize`]'s character stripping.
pub fn auto_correct(text: &str) -> String {
    let index = TermSimilarityIndex::new();
    text.split_whitespace()
        .map(|word| {
            let m = index.best_match(word);
            if m.rating > SIMILARITY_CUTOFF {
                m.target.to_string()
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
