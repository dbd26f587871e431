//! Text plumbing around the chain.
//!
//! Corpus text goes through [`normalize_lines`] and [`tokenize`] before
//! training; generated tokens go through [`format_lyrics`] before display.

mod format;
mod normalize;
mod tokenizer;

pub use format::format_lyrics;
pub use normalize::normalize_lines;
pub use tokenizer::tokenize;

/// Punctuation marks kept as tokens by the tokenizer.
pub const PUNCTUATION: [&str; 5] = [",", ".", "!", "?", ";"];

/// Tokens that end a sentence; each one spends one unit of sentence budget.
pub const SENTENCE_TERMINATORS: [&str; 3] = [".", "!", "?"];

/// Tokens that may not open a randomly chosen seed.
///
/// Unlike [`SENTENCE_TERMINATORS`] this set holds the comma, so a random
/// start never lands in the middle of a clause.
pub const SEED_REJECTED: [&str; 4] = [".", "!", "?", ","];

pub fn is_punctuation(token: &str) -> bool {
	PUNCTUATION.contains(&token)
}

pub fn is_sentence_terminator(token: &str) -> bool {
	SENTENCE_TERMINATORS.contains(&token)
}

pub fn is_seed_rejected(token: &str) -> bool {
	SEED_REJECTED.contains(&token)
}
