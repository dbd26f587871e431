use crate::error::InputError;
use crate::text::tokenize;

/// Maximum number of followups appended in one walk unless overridden.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Strategy used to select the starting context of a generation.
///
/// # Variants
/// - `Random`: pick a random context of the chain, skipping contexts that
///   open with punctuation.
/// - `Custom(tokens)`: start from these tokens; their number must match the
///   order of the chain.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum StartSeed {
	#[default]
	Random,
	Custom(Vec<String>),
}

impl StartSeed {
	/// Builds a seed from user text.
	///
	/// Blank text means a random start; anything else is tokenized the same
	/// way as the training corpus, even when no token survives, so the
	/// generator can reject its length.
	pub fn from_text(text: &str) -> Self {
		if text.trim().is_empty() {
			StartSeed::Random
		} else {
			StartSeed::Custom(tokenize(text))
		}
	}
}

/// Input parameters of a generation.
///
/// # Invariants
/// - `sentences` is always >= 1
/// - `max_steps` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Number of sentence terminators (`.`, `!`, `?`) to emit before stopping.
	sentences: usize,

	/// How the walk starts.
	pub start_seed: StartSeed,

	/// Cap on the number of followups appended, for chains that never reach
	/// a terminator.
	max_steps: usize,
}

impl GenerationInput {
	/// Creates an input producing `sentences` sentences from a random start.
	///
	/// # Errors
	/// Returns [`InputError::EmptySentenceBudget`] if `sentences` is 0.
	pub fn new(sentences: usize) -> Result<Self, InputError> {
		if sentences == 0 {
			return Err(InputError::EmptySentenceBudget);
		}
		Ok(Self { sentences, start_seed: StartSeed::Random, max_steps: DEFAULT_MAX_STEPS })
	}

	/// Sets the starting seed.
	pub fn with_seed(mut self, start_seed: StartSeed) -> Self {
		self.start_seed = start_seed;
		self
	}

	/// Sets the step cap. A value of 0 is raised to 1.
	pub fn with_max_steps(mut self, max_steps: usize) -> Self {
		self.max_steps = max_steps.max(1);
		self
	}

	pub fn sentences(&self) -> usize {
		self.sentences
	}

	pub fn max_steps(&self) -> usize {
		self.max_steps
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_sentences_is_rejected() {
		assert_eq!(GenerationInput::new(0), Err(InputError::EmptySentenceBudget));
	}

	#[test]
	fn blank_seed_text_means_random() {
		assert_eq!(StartSeed::from_text(""), StartSeed::Random);
		assert_eq!(StartSeed::from_text("  \t "), StartSeed::Random);
		assert_eq!(StartSeed::from_text("--"), StartSeed::Custom(Vec::new()));
		assert_eq!(StartSeed::from_text("\""), StartSeed::Custom(Vec::new()));
		assert_eq!(
			StartSeed::from_text("Another Brick"),
			StartSeed::Custom(vec!["another".to_owned(), "brick".to_owned()])
		);
	}

	#[test]
	fn builder_sets_fields() {
		let input = GenerationInput::new(3)
			.unwrap()
			.with_seed(StartSeed::from_text("hey you"))
			.with_max_steps(0);
		assert_eq!(input.sentences(), 3);
		assert_eq!(input.max_steps(), 1);
		assert!(matches!(input.start_seed, StartSeed::Custom(ref t) if t.len() == 2));
	}
}
