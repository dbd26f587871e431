use super::is_punctuation;

const SENTENCE_END_CHARS: [char; 3] = ['.', '!', '?'];

/// Renders generated tokens as lyrics.
///
/// - The first word of each line is capitalized
/// - Words are separated by single spaces
/// - A comma is glued to the previous word
/// - `.`, `!`, `?` and `;` are glued to the previous word and end the line
///
/// The text is cut after its last `.`, `!` or `?`, which also drops the final
/// line break. Text without any of them is returned as built.
pub fn format_lyrics<S: AsRef<str>>(tokens: &[S]) -> String {
	let mut result = String::new();
	let mut new_line = true;

	for token in tokens {
		let token = token.as_ref();
		if is_punctuation(token) {
			result.push_str(token);
			if token != "," {
				result.push('\n');
				new_line = true;
			}
		} else if new_line {
			result.push_str(&capitalize(token));
			new_line = false;
		} else {
			result.push(' ');
			result.push_str(token);
		}
	}

	if let Some(last) = result.rfind(SENTENCE_END_CHARS) {
		result.truncate(last + 1);
	}
	result
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
		None => String::new(),
	}
}
