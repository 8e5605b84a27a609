use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LoremError, RandomError};

/// Reads a word list, one word per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`, trims each line
/// - Skips blank lines
///
/// # Errors
/// - `Io` if the file cannot be read.
/// - `Random(EmptySequence)` if the file holds no word.
pub fn read_lexicon<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, LoremError> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)?.read_to_string(&mut contents)?;

	let words: Vec<String> = contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect();

	if words.is_empty() {
		return Err(RandomError::EmptySequence.into());
	}
	log::debug!("Loaded {} words from {}", words.len(), path.display());
	Ok(words)
}
