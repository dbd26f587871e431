use lyrics_gen_core::InputError;
use lyrics_gen_core::model::context::Context;
use lyrics_gen_core::model::markov_chain::MarkovChain;
use lyrics_gen_core::text::tokenize;

const VERSE: &str = "The tide comes in, the tide goes out. I walk the pier and sing aloud! \
	Where are the boats tonight? The lights are low, the sea is wide.";

fn snapshot(chain: &MarkovChain) -> Vec<(Context, Vec<(Context, usize)>, usize)> {
	let mut states: Vec<_> = chain
		.states()
		.map(|(context, state)| {
			let mut followups: Vec<_> = state.followups().map(|(f, c)| (f.clone(), c)).collect();
			followups.sort();
			(context.clone(), followups, state.total())
		})
		.collect();
	states.sort();
	states
}

#[test]
fn counts_are_conserved() {
	let tokens = tokenize(VERSE);
	for order in 1..=4 {
		let mut chain = MarkovChain::new(order).unwrap();
		chain.train(&tokens).unwrap();

		let mut recorded = 0;
		for (_, state) in chain.states() {
			let sum: usize = state.followups().map(|(_, count)| count).sum();
			assert_eq!(state.total(), sum);
			assert!(state.followups().all(|(_, count)| count >= 1));
			recorded += state.total();
		}
		// One recording per window whose followup fits
		assert_eq!(recorded, tokens.len() + 1 - 2 * order);
		assert_eq!(chain.statistics().observation_count, recorded);
	}
}

#[test]
fn total_matches_full_window_occurrences() {
	let tokens = tokenize(VERSE);
	let order = 2;
	let mut chain = MarkovChain::new(order).unwrap();
	chain.train(&tokens).unwrap();

	for (context, state) in chain.states() {
		let with_followup = (0..=tokens.len() - 2 * order)
			.filter(|&i| tokens[i..i + order] == *context.tokens())
			.count();
		assert_eq!(state.total(), with_followup, "context {context}");
	}
}

#[test]
fn training_is_deterministic() {
	let tokens = tokenize(VERSE);
	let mut first = MarkovChain::new(2).unwrap();
	let mut second = MarkovChain::new(2).unwrap();
	first.train(&tokens).unwrap();
	second.train(&tokens).unwrap();

	assert_eq!(snapshot(&first), snapshot(&second));
	assert_eq!(first.contexts().collect::<Vec<_>>(), second.contexts().collect::<Vec<_>>());
}

#[test]
fn training_twice_doubles_every_count() {
	let tokens = tokenize(VERSE);
	let mut once = MarkovChain::new(1).unwrap();
	once.train(&tokens).unwrap();
	let mut twice = MarkovChain::new(1).unwrap();
	twice.train(&tokens).unwrap();
	twice.train(&tokens).unwrap();

	assert_eq!(once.len(), twice.len());
	for (context, state) in once.states() {
		let doubled = twice.state(context).unwrap();
		assert_eq!(doubled.total(), state.total() * 2);
		for (followup, count) in state.followups() {
			assert_eq!(doubled.count(followup), count * 2);
		}
	}
}

#[test]
fn every_key_is_a_training_window() {
	let tokens = tokenize(VERSE);
	let mut chain = MarkovChain::new(3).unwrap();
	chain.train(&tokens).unwrap();

	for context in chain.contexts() {
		assert_eq!(context.len(), 3);
		assert!(tokens.windows(3).any(|w| w == context.tokens()));
	}
}

#[test]
fn empty_data_is_rejected() {
	let mut chain = MarkovChain::new(1).unwrap();
	let none: Vec<String> = Vec::new();
	assert_eq!(chain.train(&none), Err(InputError::EmptyTrainingData));
	assert_eq!(chain.train_text(""), Err(InputError::EmptyTrainingData));
	assert_eq!(chain.train_text("-- \" --"), Err(InputError::EmptyTrainingData));
	assert!(chain.is_empty());
}
