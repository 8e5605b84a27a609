use rand::rngs::{OsRng, SmallRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};

use crate::error::RandomError;

/// A source of uniformly distributed integers.
///
/// This is the single capability every random operation of the crate is
/// built on. Implementations only have to answer one question: give me a
/// value in `[0, bound)`.
pub trait RandomSource {
	/// Returns a value uniformly distributed over `[0, bound)`.
	///
	/// Callers never pass `bound == 0`.
	fn below(&mut self, bound: u64) -> Result<u64, RandomError>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
	fn below(&mut self, bound: u64) -> Result<u64, RandomError> {
		(**self).below(bound)
	}
}

/// Fast, statistically weak generator (xoshiro via `SmallRng`).
///
/// Fine for filler text and test data, never for anything an attacker
/// could benefit from predicting.
#[derive(Debug, Clone)]
pub struct FastRandom {
	inner: SmallRng,
}

impl FastRandom {
	/// Creates a generator seeded from the thread-local generator.
	pub fn new() -> Self {
		Self { inner: SmallRng::from_rng(&mut rand::rng()) }
	}
}

impl Default for FastRandom {
	fn default() -> Self {
		Self::new()
	}
}

impl RandomSource for FastRandom {
	fn below(&mut self, bound: u64) -> Result<u64, RandomError> {
		Ok(self.inner.random_range(0..bound))
	}
}

/// Cryptographically strong source.
///
/// Every draw reads fresh words straight from the operating system
/// (`OsRng`). Nothing is buffered between two draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
	fn below(&mut self, bound: u64) -> Result<u64, RandomError> {
		// Values below 2^64 mod bound would bias the low residues
		let threshold = bound.wrapping_neg() % bound;
		loop {
			let value = OsRng.try_next_u64()?;
			if value >= threshold {
				return Ok(value % bound);
			}
		}
	}
}

/// Deterministic source for reproducible output.
///
/// Two instances built from the same seed yield the same stream.
#[derive(Debug, Clone)]
pub struct SeededRandom {
	inner: StdRng,
}

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self { inner: StdRng::seed_from_u64(seed) }
	}
}

impl RandomSource for SeededRandom {
	fn below(&mut self, bound: u64) -> Result<u64, RandomError> {
		Ok(self.inner.random_range(0..bound))
	}
}

/// Per-call choice between the fast and the secure source.
///
/// This is what the `secure: bool` flag of the public functions turns into.
/// There is no process-wide default: each call builds its own.
#[derive(Debug, Clone)]
pub enum Randomness {
	Fast(FastRandom),
	Secure(SecureRandom),
}

impl Randomness {
	pub fn new(secure: bool) -> Self {
		if secure {
			Self::Secure(SecureRandom)
		} else {
			Self::Fast(FastRandom::new())
		}
	}

	pub fn is_secure(&self) -> bool {
		matches!(self, Self::Secure(_))
	}
}

impl RandomSource for Randomness {
	fn below(&mut self, bound: u64) -> Result<u64, RandomError> {
		match self {
			Self::Fast(source) => source.below(bound),
			Self::Secure(source) => source.below(bound),
		}
	}
}

/// Generator for cosmetic jitter (punctuation) that must stay independent
/// from the source used for selection.
pub fn punctuation_rng() -> SmallRng {
	SmallRng::from_rng(&mut rand::rng())
}
