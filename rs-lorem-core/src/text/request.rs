use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Granularity of generated text.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
	Word,
	Sentence,
	#[default]
	Paragraph,
}

impl Unit {
	/// Separator placed between two generated units.
	pub fn separator(self) -> &'static str {
		match self {
			Unit::Word => " ",
			Unit::Sentence | Unit::Paragraph => "\n",
		}
	}
}

impl fmt::Display for Unit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Unit::Word => "word",
			Unit::Sentence => "sentence",
			Unit::Paragraph => "paragraph",
		};
		f.write_str(name)
	}
}

impl FromStr for Unit {
	type Err = String;

	/// Parses `word(s)`, `sentence(s)` or `paragraph(s)`, ignoring case.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"word" | "words" => Ok(Unit::Word),
			"sentence" | "sentences" => Ok(Unit::Sentence),
			"paragraph" | "paragraphs" => Ok(Unit::Paragraph),
			other => Err(format!("Unknown unit '{other}', expected word, sentence or paragraph")),
		}
	}
}

/// Parameters of one text generation call.
///
/// Built per call and never mutated by the generator. Missing fields take
/// their defaults when deserialized, and `isCrypto` is accepted as an alias
/// of `secure`.
///
/// # Defaults
/// - `length`: 5
/// - `unit`: `Paragraph`
/// - `secure`: `false`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationRequest {
	/// Number of units to produce. Zero or negative produces nothing.
	pub length: i64,

	/// Granularity of each unit.
	pub unit: Unit,

	/// Draw words and counts from the cryptographically strong source.
	#[serde(alias = "isCrypto")]
	pub secure: bool,
}

impl GenerationRequest {
	pub fn new(length: i64, unit: Unit) -> Self {
		Self { length, unit, secure: false }
	}

	pub fn words(length: i64) -> Self {
		Self::new(length, Unit::Word)
	}

	pub fn sentences(length: i64) -> Self {
		Self::new(length, Unit::Sentence)
	}

	pub fn paragraphs(length: i64) -> Self {
		Self::new(length, Unit::Paragraph)
	}

	/// Returns a copy using the secure source when `secure` is true.
	pub fn secure(self, secure: bool) -> Self {
		Self { secure, ..self }
	}

	/// Number of units actually produced (`length` clamped at zero).
	pub fn unit_count(&self) -> usize {
		usize::try_from(self.length.max(0)).unwrap_or(usize::MAX)
	}
}

impl Default for GenerationRequest {
	fn default() -> Self {
		Self { length: 5, unit: Unit::Paragraph, secure: false }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let request = GenerationRequest::default();
		assert_eq!(request.length, 5);
		assert_eq!(request.unit, Unit::Paragraph);
		assert!(!request.secure);
	}

	#[test]
	fn negative_length_clamps_to_zero() {
		assert_eq!(GenerationRequest::words(-3).unit_count(), 0);
		assert_eq!(GenerationRequest::words(0).unit_count(), 0);
		assert_eq!(GenerationRequest::words(4).unit_count(), 4);
	}

	#[test]
	fn unit_parsing() {
		assert_eq!("Word".parse::<Unit>().unwrap(), Unit::Word);
		assert_eq!("sentences".parse::<Unit>().unwrap(), Unit::Sentence);
		assert_eq!("PARAGRAPH".parse::<Unit>().unwrap(), Unit::Paragraph);
		assert!("chapter".parse::<Unit>().is_err());
	}

	#[test]
	fn unit_display_parses_back() {
		for unit in [Unit::Word, Unit::Sentence, Unit::Paragraph] {
			assert_eq!(unit.to_string().parse::<Unit>().unwrap(), unit);
		}
	}

	#[test]
	fn deserialize_empty_object_gives_defaults() {
		let request: GenerationRequest = serde_json::from_str("{}").unwrap();
		assert_eq!(request, GenerationRequest::default());
	}

	#[test]
	fn deserialize_accepts_is_crypto() {
		let request: GenerationRequest =
			serde_json::from_str(r#"{"length": 1, "unit": "word", "isCrypto": true}"#).unwrap();
		assert_eq!(request, GenerationRequest::words(1).secure(true));
	}

	#[test]
	fn serialize_uses_lowercase_unit() {
		let json = serde_json::to_string(&GenerationRequest::sentences(2)).unwrap();
		assert_eq!(json, r#"{"length":2,"unit":"sentence","secure":false}"#);
	}
}
