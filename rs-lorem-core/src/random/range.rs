use std::ops::{Range, RangeTo};

use super::source::{RandomSource, Randomness};
use crate::error::RandomError;

/// Half-open integer bounds accepted by [`random_int`].
///
/// `min..max` draws from `[min, max)`; `..max` is shorthand for `0..max`.
pub trait IntRange {
	/// Returns `(min, max)`.
	fn bounds(&self) -> (i64, i64);
}

impl IntRange for Range<i64> {
	fn bounds(&self) -> (i64, i64) {
		(self.start, self.end)
	}
}

impl IntRange for RangeTo<i64> {
	fn bounds(&self) -> (i64, i64) {
		(0, self.end)
	}
}

/// Returns a random integer in the given half-open range.
///
/// # Parameters
/// - `range`: `min..max` or `..max` (then `min` is 0).
/// - `secure`: draw from the cryptographically strong source instead of the
///   fast one.
///
/// # Behavior
/// - `min == max` returns `min` without drawing anything.
/// - Negative bounds are supported over the whole `i64` domain.
///
/// # Errors
/// - `InvalidRange` if `max < min`.
/// - `Entropy` if the secure source cannot reach the OS generator.
pub fn random_int<R: IntRange>(range: R, secure: bool) -> Result<i64, RandomError> {
	random_int_with(range, &mut Randomness::new(secure))
}

/// Same as [`random_int`] with an explicit source.
pub fn random_int_with<R: IntRange, S: RandomSource>(range: R, source: &mut S) -> Result<i64, RandomError> {
	let (min, max) = range.bounds();
	if max == min {
		return Ok(min);
	}
	if max < min {
		return Err(RandomError::invalid_range(min, max));
	}

	// Width fits in u64 even for i64::MIN..i64::MAX
	let width = (i128::from(max) - i128::from(min)) as u64;
	let offset = source.below(width)?;
	Ok((i128::from(min) + i128::from(offset)) as i64)
}

/// Returns a random index in `[0, len)`.
///
/// # Errors
/// `EmptySequence` if `len` is 0.
pub(crate) fn random_index<S: RandomSource>(len: usize, source: &mut S) -> Result<usize, RandomError> {
	if len == 0 {
		return Err(RandomError::EmptySequence);
	}
	Ok(source.below(len as u64)? as usize)
}
