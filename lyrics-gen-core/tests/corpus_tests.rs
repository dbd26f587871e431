use std::path::PathBuf;

use lyrics_gen_core::MarkovError;
use lyrics_gen_core::corpus::{find_corpus, list_corpora, list_files, load_corpus, train_corpus};
use lyrics_gen_core::model::context::Context;
use lyrics_gen_core::model::generation_input::GenerationInput;
use lyrics_gen_core::model::generator::Generator;
use lyrics_gen_core::text::format_lyrics;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fixtures() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/corpus")
}

#[test]
fn corpora_are_sub_directories() {
	assert_eq!(list_corpora(fixtures()).unwrap(), vec!["Salt Marsh", "desert", "harbor"]);
}

#[test]
fn corpus_lookup_ignores_case() {
	assert_eq!(find_corpus(fixtures(), "salt marsh").unwrap().as_deref(), Some("Salt Marsh"));
	assert_eq!(find_corpus(fixtures(), " SALT MARSH ").unwrap().as_deref(), Some("Salt Marsh"));
	assert_eq!(find_corpus(fixtures(), "Harbor").unwrap().as_deref(), Some("harbor"));
	assert_eq!(find_corpus(fixtures(), "lagoon").unwrap(), None);
}

#[test]
fn mixed_case_corpus_trains_from_its_stored_name() {
	let name = find_corpus(fixtures(), "salt marsh").unwrap().unwrap();
	let chain = train_corpus(1, fixtures().join(&name)).unwrap();
	assert!(chain.state(&Context::new(&["reeds"])).is_some());
}

#[test]
fn files_are_sorted() {
	let files = list_files(fixtures().join("harbor")).unwrap();
	let names: Vec<_> = files.iter().map(|f| f.file_name().unwrap().to_string_lossy().to_string()).collect();
	assert_eq!(names, vec!["a_tide.txt", "b_gulls.txt"]);
}

#[test]
fn corpus_text_is_normalized_and_ordered() {
	let text = load_corpus(fixtures().join("harbor")).unwrap();
	assert!(text.starts_with("The tide comes in, the tide goes out. I walk the pier and sing aloud! Where"));
	assert!(text.contains("and I will wait for you. The gulls are calling"));
	assert!(text.ends_with("the sea is wide. "));
	assert!(!text.contains('\n'));
}

#[test]
fn corpus_trains_a_chain() {
	let chain = train_corpus(1, fixtures().join("harbor")).unwrap();
	let the = chain.state(&Context::new(&["the"])).unwrap();
	assert!(the.count(&Context::new(&["tide"])) >= 2);
	assert!(the.count(&Context::new(&["pier"])) >= 2);

	let input = GenerationInput::new(2).unwrap();
	let mut generator = Generator::new(&chain, StdRng::seed_from_u64(3));
	let lyrics = format_lyrics(&generator.generate(&input).unwrap());
	assert!(!lyrics.is_empty());
	assert!(lyrics.chars().next().unwrap().is_uppercase() || !lyrics.chars().next().unwrap().is_alphabetic());
}

#[test]
fn unknown_corpus_is_an_io_error() {
	let err = train_corpus(2, fixtures().join("nowhere")).unwrap_err();
	assert!(matches!(err, MarkovError::Io(_)));
}

#[test]
fn zero_order_is_an_input_error() {
	let err = train_corpus(0, fixtures().join("desert")).unwrap_err();
	assert!(err.is_input_error());
}
