// Transcript text processing: cleanup, auto-correction, and classification

mod classifier;
mod normalizer;
mod patterns;

pub use classifier::{
    QuestionClassifier, FUZZY_HIT_THRESHOLD, KEYWORD_HIT_THRESHOLD, MIN_UTTERANCE_LEN,
};
pub use normalizer::{auto_correct, normalize};
