/// Marks that already close a line; anything else gets a full stop.
const LINE_CLOSERS: [char; 5] = [',', '.', '!', '?', ';'];

/// Turns raw lyrics into a single stream of clauses.
///
/// Each non-blank line is trimmed and closed: lines already ending with
/// punctuation are followed by a space, the others by a full stop. Blank
/// lines are dropped so they do not produce stray terminators.
pub fn normalize_lines(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + text.len() / 16);
	for line in text.lines() {
		let line = line.trim();
		if line.is_empty() {
			continue;
		}
		result.push_str(line);
		if line.ends_with(LINE_CLOSERS) {
			result.push(' ');
		} else {
			result.push_str(". ");
		}
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn open_lines_get_a_full_stop() {
		assert_eq!(
			normalize_lines("We don't need no education\nWe don't need no thought control,\n"),
			"We don't need no education. We don't need no thought control, "
		);
	}

	#[test]
	fn blank_lines_are_dropped() {
		assert_eq!(normalize_lines("\n  \nHey you!\r\n\n"), "Hey you! ");
	}

	#[test]
	fn empty_text_stays_empty() {
		assert_eq!(normalize_lines(""), "");
	}
}
