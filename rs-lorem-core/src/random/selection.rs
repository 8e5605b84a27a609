use super::range::random_index;
use super::source::{RandomSource, Randomness};
use crate::error::RandomError;

/// Charset used by [`random_string`] when none (or an empty one) is given.
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Returns one element of `values`, each with probability `1 / len`.
///
/// # Errors
/// `EmptySequence` if `values` is empty.
pub fn pick_one<T>(values: &[T], secure: bool) -> Result<&T, RandomError> {
	pick_one_with(values, &mut Randomness::new(secure))
}

/// Same as [`pick_one`] with an explicit source.
pub fn pick_one_with<'a, T, S: RandomSource>(values: &'a [T], source: &mut S) -> Result<&'a T, RandomError> {
	let index = random_index(values.len(), source)?;
	Ok(&values[index])
}

/// Builds a string of `length` characters drawn independently from `charset`.
///
/// - `None` or an empty charset falls back to [`DEFAULT_CHARSET`].
/// - The charset is split on `char`s, so multi-byte characters are valid
///   candidates.
/// - `length == 0` returns an empty string.
pub fn random_string(length: usize, charset: Option<&str>, secure: bool) -> Result<String, RandomError> {
	random_string_with(length, charset, &mut Randomness::new(secure))
}

/// Same as [`random_string`] with an explicit source.
pub fn random_string_with<S: RandomSource>(
	length: usize,
	charset: Option<&str>,
	source: &mut S,
) -> Result<String, RandomError> {
	let charset = match charset {
		Some(c) if !c.is_empty() => c,
		_ => DEFAULT_CHARSET,
	};
	let chars: Vec<char> = charset.chars().collect();

	(0..length).map(|_| pick_one_with(&chars, source).copied()).collect()
}

/// Returns `length` random bytes.
pub fn random_bytes(length: usize, secure: bool) -> Result<Vec<u8>, RandomError> {
	random_bytes_with(length, &mut Randomness::new(secure))
}

/// Same as [`random_bytes`] with an explicit source.
pub fn random_bytes_with<S: RandomSource>(length: usize, source: &mut S) -> Result<Vec<u8>, RandomError> {
	(0..length)
		.map(|_| source.below(256).map(|b| b as u8))
		.collect()
}

/// Returns `length` random bytes as lowercase hex (`2 * length` digits).
pub fn random_hex(length: usize, secure: bool) -> Result<String, RandomError> {
	random_hex_with(length, &mut Randomness::new(secure))
}

/// Same as [`random_hex`] with an explicit source.
pub fn random_hex_with<S: RandomSource>(length: usize, source: &mut S) -> Result<String, RandomError> {
	let bytes = random_bytes_with(length, source)?;
	Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}
