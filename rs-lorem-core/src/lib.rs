//! Random filler text and randomness helpers.
//!
//! This crate provides a small layered generator:
//! - Randomness sources (fast, secure, seeded) behind one `RandomSource` trait
//! - Random selection: integers over ranges, elements, strings, hex
//! - Structured text generation at word, sentence or paragraph granularity
//!
//! Nothing is global: every call picks its source through a `secure` flag or
//! takes one explicitly.

/// Error types.
pub mod error;

/// Randomness sources and random selection.
pub mod random;

/// Structured text generation.
pub mod text;

/// Lexicon loading from word list files.
pub mod io;

pub use error::{LoremError, RandomError};
pub use io::read_lexicon;
pub use random::{pick_one, random_hex, random_int, random_string};
pub use text::{GenerationRequest, Unit, generate_text, generate_text_from};
