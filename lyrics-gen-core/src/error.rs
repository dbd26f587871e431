use thiserror::Error;

/// Invalid arguments handed to training or generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
	/// `train` was called with no tokens (or text that yields none).
	#[error("InputError: valid data must be provided to train the model")]
	EmptyTrainingData,

	/// An explicit seed does not hold exactly `order` tokens.
	#[error("InputError: length of the given seed is {actual}, expected {expected}")]
	SeedLength { expected: usize, actual: usize },

	/// A model cannot be built with order 0.
	#[error("InputError: order must be >= 1, got {0}")]
	InvalidOrder(usize),

	/// Generation needs at least one sentence to produce.
	#[error("InputError: sentence budget must be >= 1")]
	EmptySentenceBudget,
}

/// Every failure the core can report.
#[derive(Debug, Error)]
pub enum MarkovError {
	#[error(transparent)]
	Input(#[from] InputError),

	/// No context of the model may start a random walk: the model is empty
	/// or every context opens with seed-rejected punctuation.
	#[error("degenerate model: no context can be used as a random seed")]
	DegenerateModel,

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl MarkovError {
	/// Returns `true` for errors caused by the caller's arguments.
	pub fn is_input_error(&self) -> bool {
		matches!(self, MarkovError::Input(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn input_errors_convert_and_classify() {
		let err: MarkovError = InputError::SeedLength { expected: 2, actual: 3 }.into();
		assert!(err.is_input_error());
		assert_eq!(err.to_string(), "InputError: length of the given seed is 3, expected 2");
	}

	#[test]
	fn degenerate_model_is_not_an_input_error() {
		assert!(!MarkovError::DegenerateModel.is_input_error());
	}
}
