// viva - hands-free interview rehearsal core
// Continuous speech capture session management plus a fixed heuristic
// classifier deciding which utterances are interview questions

pub mod answer;
pub mod capture;
pub mod events;
pub mod history;
pub mod orchestrator;
pub mod text;
pub mod vocabulary;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};
