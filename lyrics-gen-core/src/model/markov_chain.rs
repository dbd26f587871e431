use rustc_hash::FxHashMap;
use serde::Serialize;

use super::context::Context;
use super::state::State;
use crate::error::InputError;
use crate::text::tokenize;

/// A fixed-order Markov chain over tokens.
///
/// The `MarkovChain` maps every context (a run of `order` tokens) seen during
/// training to its [`State`], which counts the contexts observed right
/// after it.
///
/// # Responsibilities
/// - Build the chain from token sequences (or raw text)
/// - Accumulate followup counts for each state across training calls
/// - Expose read-only lookups for the generator
///
/// # Invariants
/// - `order` is always >= 1
/// - Each state corresponds to a unique context of length `order`
/// - Every context was observed as a sliding window during training
/// - Counts only grow; nothing is ever removed
#[derive(Clone, Debug)]
pub struct MarkovChain {
	/// Number of tokens in a context.
	order: usize,

	/// Position of each context inside `states`.
	index: FxHashMap<Context, usize>,

	/// Contexts and their states, in first-registration order.
	states: Vec<(Context, State)>,
}

/// Size summary of a trained chain.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Statistics {
	pub order: usize,
	/// Number of registered contexts.
	pub state_count: usize,
	/// Number of distinct (context, followup) pairs.
	pub transition_count: usize,
	/// Sum of all followup counts.
	pub observation_count: usize,
}

impl MarkovChain {
	/// Creates an empty chain of the given order.
	///
	/// # Errors
	/// Returns [`InputError::InvalidOrder`] if `order` is 0.
	pub fn new(order: usize) -> Result<Self, InputError> {
		if order == 0 {
			return Err(InputError::InvalidOrder(order));
		}
		Ok(Self { order, index: FxHashMap::default(), states: Vec::new() })
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of registered contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Returns the state of `context`, `None` if it was never registered.
	pub fn state(&self, context: &Context) -> Option<&State> {
		self.index.get(context).map(|&position| &self.states[position].1)
	}

	/// Registered contexts, in first-registration order.
	pub fn contexts(&self) -> impl Iterator<Item = &Context> {
		self.states.iter().map(|(context, _)| context)
	}

	/// Contexts with their states, in first-registration order.
	pub fn states(&self) -> impl Iterator<Item = (&Context, &State)> {
		self.states.iter().map(|(context, state)| (context, state))
	}

	/// Trains the chain on a token sequence.
	///
	/// Slides a window of `order` tokens over `tokens`. Every window is
	/// registered as a context; when the next `order` tokens are all
	/// available they are recorded as a followup of that context. The scan
	/// stops at the last full window, so the tail of the sequence registers
	/// contexts without followups.
	///
	/// Calling `train` again adds to the existing counts.
	///
	/// # Errors
	/// Returns [`InputError::EmptyTrainingData`] if `tokens` is empty.
	///
	/// # Notes
	/// - A sequence shorter than `order` registers nothing.
	/// - No normalization happens here; probabilities are derived from raw
	///   counts at generation time.
	pub fn train<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<(), InputError> {
		if tokens.is_empty() {
			return Err(InputError::EmptyTrainingData);
		}
		if tokens.len() < self.order {
			log::debug!("train: {} tokens is shorter than order {}, nothing registered", tokens.len(), self.order);
			return Ok(());
		}

		// One context per window start, shared between keys and followups
		let windows: Vec<Context> = tokens.windows(self.order).map(Context::new).collect();

		for (i, context) in windows.iter().enumerate() {
			let followup = windows.get(i + self.order).cloned();
			let state = self.register(context);
			if let Some(followup) = followup {
				state.record(followup);
			}
		}

		log::debug!(
			"train: {} tokens, order {}, {} states registered",
			tokens.len(),
			self.order,
			self.states.len()
		);
		Ok(())
	}

	/// Tokenizes `text` and trains the chain on the result.
	///
	/// # Errors
	/// Returns [`InputError::EmptyTrainingData`] if `text` holds no token.
	pub fn train_text(&mut self, text: &str) -> Result<(), InputError> {
		self.train(&tokenize(text))
	}

	/// Returns the state of `context`, creating an empty one if needed.
	fn register(&mut self, context: &Context) -> &mut State {
		let position = match self.index.get(context) {
			Some(&position) => position,
			None => {
				let position = self.states.len();
				self.index.insert(context.clone(), position);
				self.states.push((context.clone(), State::new()));
				position
			}
		};
		&mut self.states[position].1
	}

	/// Summarizes the size of the chain.
	pub fn statistics(&self) -> Statistics {
		let (transition_count, observation_count) = self
			.states
			.iter()
			.fold((0, 0), |(transitions, observations), (_, state)| {
				(transitions + state.len(), observations + state.total())
			});

		Statistics {
			order: self.order,
			state_count: self.states.len(),
			transition_count,
			observation_count,
		}
	}
}
