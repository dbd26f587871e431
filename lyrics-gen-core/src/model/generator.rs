use crate::error::{InputError, MarkovError};
use crate::model::context::Context;
use crate::model::generation_input::{GenerationInput, StartSeed};
use crate::model::markov_chain::MarkovChain;
use crate::model::random::RandomSource;
use crate::text::{is_seed_rejected, is_sentence_terminator};

/// Random walk over a trained [`MarkovChain`].
///
/// # Responsibilities
/// - Pick the starting context (explicit or random)
/// - Walk the chain, sampling followups proportionally to their counts
/// - Stop once enough sentences were produced, on a dead end, or at the
///   step cap
/// - Trim the trailing unfinished sentence
///
/// The generator borrows the chain read-only and owns nothing but its
/// random source.
pub struct Generator<'m, R: RandomSource> {
	chain: &'m MarkovChain,
	rng: R,
}

impl<'m, R: RandomSource> Generator<'m, R> {
	pub fn new(chain: &'m MarkovChain, rng: R) -> Self {
		Self { chain, rng }
	}

	/// Gives the random source back.
	pub fn into_source(self) -> R {
		self.rng
	}

	/// Generates a token sequence.
	///
	/// # Returns
	/// - `Ok(tokens)`: the seed tokens followed by the sampled followups,
	///   cut after the last sentence terminator (left untouched if the walk
	///   never produced one)
	/// - `Err(MarkovError::Input)`: the custom seed does not hold exactly
	///   `order` tokens
	/// - `Err(MarkovError::DegenerateModel)`: a random seed was requested and
	///   no context is eligible
	///
	/// # Notes
	/// - Reaching a context without followups, or one missing from the
	///   chain, ends the walk normally.
	/// - A single followup may hold several terminators when the order is
	///   above 1; each of them counts.
	pub fn generate(&mut self, input: &GenerationInput) -> Result<Vec<String>, MarkovError> {
		let mut state = self.start_context(&input.start_seed)?;
		let mut result: Vec<String> = state.tokens().to_vec();

		let mut sentences = input.sentences();
		let mut steps = 0;
		while sentences > 0 {
			let Some(table) = self.chain.state(&state) else {
				break;
			};
			let Some(next) = table.sample(&mut self.rng) else {
				break;
			};

			for token in next.tokens() {
				if is_sentence_terminator(token) {
					sentences = sentences.saturating_sub(1);
				}
			}
			result.extend_from_slice(next.tokens());
			state = next.clone();

			steps += 1;
			if steps >= input.max_steps() {
				log::warn!("generate: stopped after {} steps without reaching the sentence budget", steps);
				break;
			}
		}

		trim_trailing_fragment(&mut result);
		Ok(result)
	}

	/// Resolves the starting context.
	fn start_context(&mut self, start_seed: &StartSeed) -> Result<Context, MarkovError> {
		match start_seed {
			StartSeed::Custom(tokens) => {
				if tokens.len() != self.chain.order() {
					return Err(InputError::SeedLength { expected: self.chain.order(), actual: tokens.len() }.into());
				}
				Ok(Context::new(tokens))
			}
			StartSeed::Random => self.random_context(),
		}
	}

	/// Picks a context uniformly among those not opening with seed-rejected
	/// punctuation.
	fn random_context(&mut self) -> Result<Context, MarkovError> {
		let candidates: Vec<&Context> = self
			.chain
			.contexts()
			.filter(|context| context.first().is_some_and(|token| !is_seed_rejected(token)))
			.collect();

		if candidates.is_empty() {
			return Err(MarkovError::DegenerateModel);
		}
		Ok(candidates[self.rng.below(candidates.len())].clone())
	}
}

/// Cuts `tokens` right after the last sentence terminator.
///
/// Leaves `tokens` untouched when it holds no terminator.
pub fn trim_trailing_fragment(tokens: &mut Vec<String>) {
	if let Some(last) = tokens.iter().rposition(|token| is_sentence_terminator(token)) {
		tokens.truncate(last + 1);
	}
}
