//! Randomness primitives: sources, integer ranges and random selection.
//!
//! Every public function takes a `secure` flag picking the source for that
//! call, and has a `*_with` variant accepting any [`RandomSource`].

/// The `RandomSource` capability and its fast, secure and seeded variants.
pub mod source;

/// Uniform integers over half-open ranges.
pub mod range;

/// Picking elements and building random strings.
pub mod selection;

pub use range::{IntRange, random_int, random_int_with};
pub use selection::{
	DEFAULT_CHARSET, pick_one, pick_one_with, random_bytes, random_bytes_with, random_hex, random_hex_with,
	random_string, random_string_with,
};
pub use source::{FastRandom, RandomSource, Randomness, SecureRandom, SeededRandom};
