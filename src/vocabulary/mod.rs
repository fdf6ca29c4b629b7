// Fixed interview-domain vocabulary and fuzzy lookup over it

mod index;
mod terms;

pub use index::{TermMatch, TermSimilarityIndex, SIMILARITY_CUTOFF};
pub use terms::INTERVIEW_VOCABULARY;
