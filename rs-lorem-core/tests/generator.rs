use rs_lorem_core::random::{SeededRandom, random_int, random_int_with};
use rs_lorem_core::text::{DEFAULT_LEXICON, generate_text_with};
use rs_lorem_core::{GenerationRequest, Unit, generate_text, generate_text_from, pick_one, random_string};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn zero_length_is_empty_for_every_unit() {
	for unit in [Unit::Word, Unit::Sentence, Unit::Paragraph] {
		for secure in [false, true] {
			let request = GenerationRequest::new(0, unit).secure(secure);
			assert_eq!(generate_text(&request).unwrap(), "");
		}
	}
}

#[test]
fn three_words_from_lexicon() {
	for secure in [false, true] {
		let text = generate_text(&GenerationRequest::words(3).secure(secure)).unwrap();
		let tokens: Vec<&str> = text.split(' ').collect();
		assert_eq!(tokens.len(), 3);
		assert!(tokens.iter().all(|t| DEFAULT_LEXICON.contains(t)));
	}
}

#[test]
fn two_sentences() {
	for secure in [false, true] {
		let text = generate_text(&GenerationRequest::sentences(2).secure(secure)).unwrap();
		let sentences: Vec<&str> = text.split('\n').collect();
		assert_eq!(sentences.len(), 2);
		for sentence in sentences {
			assert!(sentence.ends_with('.'));
			assert!(sentence.chars().next().unwrap().is_uppercase());
			let words = sentence.split(' ').count();
			assert!((5..15).contains(&words), "{words} words in {sentence}");
		}
	}
}

#[test]
fn paragraphs_are_newline_separated() {
	for secure in [false, true] {
		let text = generate_text(&GenerationRequest::default().secure(secure)).unwrap();
		let paragraphs: Vec<&str> = text.split('\n').collect();
		assert_eq!(paragraphs.len(), 5);
		for paragraph in paragraphs {
			let sentences = paragraph.matches('.').count();
			assert!((3..7).contains(&sentences), "{sentences} sentences in {paragraph}");
		}
	}
}

#[test]
fn huge_length_with_empty_lexicon_returns_error() {
	let empty: [&str; 0] = [];
	for secure in [false, true] {
		let request = GenerationRequest::words(i64::MAX).secure(secure);
		let err = generate_text_from(&request, &empty).unwrap_err();
		assert!(err.is_empty_sequence());
	}
}

#[test]
fn single_word_from_custom_lexicon() {
	let request: GenerationRequest =
		serde_json::from_str(r#"{"length": 1, "unit": "word", "isCrypto": false}"#).unwrap();
	for _ in 0..50 {
		let text = generate_text_from(&request, &["alpha", "beta"]).unwrap();
		assert!(text == "alpha" || text == "beta", "{text}");
	}
}

#[test]
fn owned_lexicon_is_accepted() {
	let lexicon = vec!["only".to_owned()];
	let text = generate_text_from(&GenerationRequest::words(4), &lexicon).unwrap();
	assert_eq!(text, "only only only only");
}

#[test]
fn negative_range_holds_over_many_draws() {
	for _ in 0..10_000 {
		let v = random_int(-100..100, false).unwrap();
		assert!((-100..100).contains(&v));
	}
}

#[test]
fn zero_width_range_for_many_values() {
	let mut source = SeededRandom::new(11);
	for n in [-1_000_000, -1, 0, 1, 77, i64::MIN, i64::MAX] {
		assert_eq!(random_int(n..n, false).unwrap(), n);
		assert_eq!(random_int(n..n, true).unwrap(), n);
		assert_eq!(random_int_with(n..n, &mut source).unwrap(), n);
	}
}

#[test]
fn pick_one_and_random_string() {
	let values = vec![1, 2, 3];
	assert!(values.contains(pick_one(&values, true).unwrap()));
	let s = random_string(12, Some("xyz"), true).unwrap();
	assert_eq!(s.len(), 12);
	assert!(s.chars().all(|c| "xyz".contains(c)));
}

#[test]
fn seeded_generation_is_reproducible() {
	let request = GenerationRequest::sentences(4);
	let run = || {
		let mut source = SeededRandom::new(2024);
		let mut punctuation = StdRng::seed_from_u64(7);
		generate_text_with(&request, DEFAULT_LEXICON, &mut source, &mut punctuation).unwrap()
	};
	assert_eq!(run(), run());
}

#[test]
fn concurrent_generation() {
	let units = [Unit::Word, Unit::Sentence, Unit::Paragraph];
	let handles: Vec<_> = (0..6)
		.map(|i| {
			let request = GenerationRequest::new(3, units[i % 3]).secure(i % 2 == 0);
			(request, std::thread::spawn(move || generate_text(&request)))
		})
		.collect();
	for (request, handle) in handles {
		let text = handle.join().unwrap().unwrap();
		assert_eq!(text.split(request.unit.separator()).count(), 3, "{request:?}");
	}
}
