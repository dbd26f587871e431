use std::fmt;

use rustc_hash::FxHashMap;

use super::context::Context;
use super::random::RandomSource;

/// Transition table of a single state of the chain.
///
/// A `State` corresponds to one context and stores every context observed
/// right after it, with the number of times it was observed.
///
/// Sampling a followup picks the next block of tokens of a walk, so the
/// counts double as unnormalized transition weights.
///
/// ## Responsibilities:
/// - Accumulate followup occurrences during training
/// - Sample the next context with frequency-proportional probability
///
/// ## Invariants
/// - `total` is the sum of all followup counts
/// - Each followup count is strictly positive
/// - Followups are never removed; they keep their first-observation order
#[derive(Clone, Debug, Default)]
pub struct State {
	/// Number of observations recorded for this state.
	total: usize,
	/// Followups with their occurrence count, in first-observation order.
	followups: Vec<(Context, usize)>,
	/// Position of each followup inside `followups`.
	positions: FxHashMap<Context, usize>,
}

impl State {
	/// Creates an empty state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an occurrence of `followup`.
	///
	/// - If the followup already exists, its occurrence count is increased.
	/// - Otherwise, it is appended with an initial count of 1.
	///
	/// `total` grows by one on every call.
	pub fn record(&mut self, followup: Context) {
		match self.positions.get(&followup) {
			Some(&position) => self.followups[position].1 += 1,
			None => {
				self.positions.insert(followup.clone(), self.followups.len());
				self.followups.push((followup, 1));
			}
		}
		self.total += 1;
	}

	/// Number of observations recorded for this state.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Occurrence count of `followup`, 0 if it was never observed.
	pub fn count(&self, followup: &Context) -> usize {
		self.positions.get(followup).map_or(0, |&position| self.followups[position].1)
	}

	/// Observed followups and their counts, in first-observation order.
	pub fn followups(&self) -> impl Iterator<Item = (&Context, usize)> {
		self.followups.iter().map(|(followup, count)| (followup, *count))
	}

	/// Number of distinct followups.
	pub fn len(&self) -> usize {
		self.followups.len()
	}

	/// `true` when nothing was ever recorded (a dead end).
	pub fn is_empty(&self) -> bool {
		self.followups.is_empty()
	}

	/// Relative frequency of `followup`.
	///
	/// Returns `None` if the state is empty or the followup is unknown.
	pub fn probability(&self, followup: &Context) -> Option<f64> {
		if self.total == 0 {
			return None;
		}
		let position = *self.positions.get(followup)?;
		Some(self.followups[position].1 as f64 / self.total as f64)
	}

	/// Samples a followup with probability `count / total`.
	///
	/// Draws one value in `0..total` and walks the followups subtracting
	/// their counts until the draw falls inside one of them.
	///
	/// Returns `None` if the state has no followups.
	pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&Context> {
		if self.total == 0 {
			return None;
		}

		let mut r = rng.below(self.total);
		for (followup, occurrence) in &self.followups {
			if r < *occurrence {
				return Some(followup);
			}
			r -= occurrence;
		}

		// Unreachable while `total` matches the counts.
		self.followups.last().map(|(followup, _)| followup)
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[")?;
		for (i, (followup, count)) in self.followups.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{} : {:.4}", followup, *count as f64 / self.total as f64)?;
		}
		write!(f, "]")
	}
}
