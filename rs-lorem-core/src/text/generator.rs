use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::lexicon::DEFAULT_LEXICON;
use super::request::{GenerationRequest, Unit};
use crate::error::RandomError;
use crate::random::range::random_int_with;
use crate::random::selection::pick_one_with;
use crate::random::source::{RandomSource, Randomness, SeededRandom, punctuation_rng};

/// Words per sentence, half-open.
const SENTENCE_WORDS: std::ops::Range<i64> = 5..15;

/// Sentences per paragraph, half-open.
const PARAGRAPH_SENTENCES: std::ops::Range<i64> = 3..7;

/// Keeps the punctuation stream of a seeded run apart from its selection stream.
const PUNCTUATION_SEED_MASK: u64 = 0x9e37_79b9_7f4a_7c15;

/// Chance for a non-final word of a sentence to be followed by a comma.
const COMMA_PROBABILITY: f64 = 0.1;

/// Picks one word of the lexicon.
///
/// # Errors
/// `EmptySequence` if the lexicon is empty.
pub fn word<'a, S, R>(lexicon: &'a [S], source: &mut R) -> Result<&'a str, RandomError>
where
	S: AsRef<str>,
	R: RandomSource,
{
	Ok(pick_one_with(lexicon, source)?.as_ref())
}

/// Builds one sentence of 5 to 14 words.
///
/// Words are separated by single spaces, a non-final word is followed by a
/// comma with a 10% chance, the first letter is capitalized and the
/// sentence ends with a period.
///
/// Word count and words come from `source`. Commas come from
/// `punctuation` only, which keeps them out of the selection stream.
pub fn sentence<S, R, P>(lexicon: &[S], source: &mut R, punctuation: &mut P) -> Result<String, RandomError>
where
	S: AsRef<str>,
	R: RandomSource,
	P: Rng,
{
	let count = random_int_with(SENTENCE_WORDS, source)? as usize;
	log::trace!("sentence of {count} words");

	let mut text = String::new();
	for i in 0..count {
		if i > 0 {
			text.push(' ');
		}
		text.push_str(word(lexicon, source)?);
		if i + 1 < count && punctuation.random_bool(COMMA_PROBABILITY) {
			text.push(',');
		}
	}

	let mut sentence = capitalize(&text);
	sentence.push('.');
	Ok(sentence)
}

/// Builds one paragraph of 3 to 6 sentences separated by single spaces.
pub fn paragraph<S, R, P>(lexicon: &[S], source: &mut R, punctuation: &mut P) -> Result<String, RandomError>
where
	S: AsRef<str>,
	R: RandomSource,
	P: Rng,
{
	let count = random_int_with(PARAGRAPH_SENTENCES, source)? as usize;
	log::trace!("paragraph of {count} sentences");

	let sentences = (0..count)
		.map(|_| sentence(lexicon, source, punctuation))
		.collect::<Result<Vec<_>, _>>()?;
	Ok(sentences.join(" "))
}

/// Generates filler text from the built-in lexicon.
///
/// See [`generate_text_with`] for the layout of the output.
pub fn generate_text(request: &GenerationRequest) -> Result<String, RandomError> {
	generate_text_from(request, DEFAULT_LEXICON)
}

/// Generates filler text from a caller supplied lexicon.
///
/// The selection source follows `request.secure`. Punctuation jitter uses
/// its own fast generator whatever `request.secure` is.
pub fn generate_text_from<S: AsRef<str>>(request: &GenerationRequest, lexicon: &[S]) -> Result<String, RandomError> {
	let mut source = Randomness::new(request.secure);
	let mut punctuation = punctuation_rng();
	generate_text_with(request, lexicon, &mut source, &mut punctuation)
}

/// Generates reproducible filler text from a seed.
///
/// Selection and punctuation get two distinct streams derived from `seed`.
/// `request.secure` is ignored.
pub fn generate_text_seeded<S: AsRef<str>>(
	request: &GenerationRequest,
	lexicon: &[S],
	seed: u64,
) -> Result<String, RandomError> {
	let mut source = SeededRandom::new(seed);
	let mut punctuation = StdRng::seed_from_u64(seed ^ PUNCTUATION_SEED_MASK);
	generate_text_with(request, lexicon, &mut source, &mut punctuation)
}

/// Generates filler text with explicit generators.
///
/// # Parameters
/// - `request`: length and unit. `request.secure` is ignored, `source` is
///   used as given.
/// - `lexicon`: candidate words.
/// - `source`: draws words, word counts and sentence counts.
/// - `punctuation`: draws comma placement only.
///
/// # Behavior
/// - Produces `max(0, request.length)` units.
/// - Words are joined with a space, sentences and paragraphs with `'\n'`.
/// - A zero or negative length returns an empty string without drawing.
///
/// The output only depends on the inputs and the two streams: replaying
/// the same streams gives the same text.
///
/// # Errors
/// - `EmptySequence` if a word has to be drawn from an empty lexicon.
/// - Any error raised by `source`.
pub fn generate_text_with<S, R, P>(
	request: &GenerationRequest,
	lexicon: &[S],
	source: &mut R,
	punctuation: &mut P,
) -> Result<String, RandomError>
where
	S: AsRef<str>,
	R: RandomSource,
	P: Rng,
{
	let count = request.unit_count();
	log::debug!(
		"Generating {} {}(s) from a lexicon of {} words (secure: {})",
		count,
		request.unit,
		lexicon.len(),
		request.secure
	);

	let units = (0..count)
		.map(|_| match request.unit {
			Unit::Word => word(lexicon, source).map(str::to_owned),
			Unit::Sentence => sentence(lexicon, source, punctuation),
			Unit::Paragraph => paragraph(lexicon, source, punctuation),
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(units.join(request.unit.separator()))
}

/// Upper-cases the first character (Unicode aware).
fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
