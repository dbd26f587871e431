use std::sync::LazyLock;

use regex::Regex;

/// Words (letters, digits, underscores and apostrophes) or one punctuation mark.
static TOKEN_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[\w']+|[.,!?;]").expect("TOKEN_PATTERN must compile"));

/// Splits text into lowercase word and punctuation tokens.
///
/// Every other character (spaces, quotes, dashes, ...) only separates tokens.
pub fn tokenize(text: &str) -> Vec<String> {
	let lowered = text.to_lowercase();
	TOKEN_PATTERN
		.find_iter(&lowered)
		.map(|m| m.as_str().to_owned())
		.collect()
}
