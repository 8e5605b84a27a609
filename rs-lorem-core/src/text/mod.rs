//! Structured filler text: word, sentence and paragraph generation.

/// Word, sentence and paragraph composition.
pub mod generator;

/// Built-in vocabulary.
pub mod lexicon;

/// Generation parameters (`GenerationRequest`, `Unit`).
pub mod request;

pub use generator::{generate_text, generate_text_from, generate_text_seeded, generate_text_with, paragraph, sentence, word};
pub use lexicon::DEFAULT_LEXICON;
pub use request::{GenerationRequest, Unit};
