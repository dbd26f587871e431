use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An ordered, fixed-length run of tokens.
///
/// A `Context` is both the key of a state in the chain and the value of a
/// transition (the block of tokens that follows a state). Tokens live behind
/// an `Arc`, so cloning a context is a reference-count bump and the same
/// storage is shared between the table keys and every followup entry.
///
/// ## Invariants
/// - Immutable once built
/// - Equality and hashing are structural (element-wise over tokens)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context(Arc<[String]>);

impl Context {
	/// Builds a context from a slice of tokens.
	pub fn new<S: AsRef<str>>(tokens: &[S]) -> Self {
		Self(tokens.iter().map(|t| t.as_ref().to_owned()).collect())
	}

	/// Tokens of the context, in order.
	pub fn tokens(&self) -> &[String] {
		&self.0
	}

	/// First token, `None` only for an empty context.
	pub fn first(&self) -> Option<&str> {
		self.0.first().map(String::as_str)
	}
}

impl Deref for Context {
	type Target = [String];

	fn deref(&self) -> &[String] {
		&self.0
	}
}

impl From<Vec<String>> for Context {
	fn from(tokens: Vec<String>) -> Self {
		Self(tokens.into())
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({})", self.0.join(", "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn equal_tokens_make_equal_keys() {
		let a = Context::new(&["the", "wall"]);
		let b = Context::from(vec!["the".to_owned(), "wall".to_owned()]);
		assert_eq!(a, b);

		let mut set = HashSet::new();
		set.insert(a);
		assert!(set.contains(&b));
		assert!(!set.contains(&Context::new(&["wall", "the"])));
	}

	#[test]
	fn display_lists_tokens() {
		assert_eq!(Context::new(&["we", "will", "rock"]).to_string(), "(we, will, rock)");
	}
}
