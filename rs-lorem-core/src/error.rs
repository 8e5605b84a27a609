//! Error types shared by the random and text layers.

/// Failures raised by the randomness primitives and random selection.
#[derive(Debug, thiserror::Error)]
pub enum RandomError {
	/// The upper bound lies below the lower bound.
	///
	/// A zero-width range (`min == max`) is not an error.
	#[error("invalid range [{min}, {max}): max must not be lower than min")]
	InvalidRange { min: i64, max: i64 },

	/// Selection from a sequence (or lexicon) with no element.
	#[error("cannot select from an empty sequence")]
	EmptySequence,

	/// The operating system entropy source could not be read.
	#[error("entropy source unavailable: {0}")]
	Entropy(#[from] rand::rand_core::OsError),
}

impl RandomError {
	/// Creates an `InvalidRange` error for the given bounds.
	pub fn invalid_range(min: i64, max: i64) -> Self {
		Self::InvalidRange { min, max }
	}

	/// Check if this is an `EmptySequence` error.
	pub fn is_empty_sequence(&self) -> bool {
		matches!(self, Self::EmptySequence)
	}
}

/// Top-level error of the crate.
///
/// Wraps [`RandomError`] and the I/O failures of lexicon loading.
#[derive(Debug, thiserror::Error)]
pub enum LoremError {
	#[error(transparent)]
	Random(#[from] RandomError),

	#[error("failed to read lexicon: {0}")]
	Io(#[from] std::io::Error),
}
