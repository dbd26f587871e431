use std::io::{self, BufRead, Write};

use lyrics_gen_core::MarkovError;
use lyrics_gen_core::config::{self, MAX_ORDER, MIN_ORDER};
use lyrics_gen_core::corpus::{find_corpus, list_corpora, train_corpus};
use lyrics_gen_core::model::generation_input::{GenerationInput, StartSeed};
use lyrics_gen_core::model::generator::Generator;
use lyrics_gen_core::text::format_lyrics;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Words that leave the program at any prompt.
const QUIT_WORDS: [&str; 3] = ["q", "quit", "escape"];

/// Prints `message` and reads one trimmed line.
///
/// Returns `None` when the user asked to quit or stdin is closed.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
	print!("{message}");
	io::stdout().flush()?;

	let mut line = String::new();
	if input.read_line(&mut line)? == 0 {
		return Ok(None);
	}
	let line = line.trim().to_owned();
	if QUIT_WORDS.contains(&line.to_lowercase().as_str()) {
		return Ok(None);
	}
	Ok(Some(line))
}

/// Asks until the answer parses into a value accepted by `valid`.
fn prompt_number(
	input: &mut impl BufRead,
	message: &str,
	valid: impl Fn(usize) -> bool,
	retry: &str,
) -> io::Result<Option<usize>> {
	loop {
		let Some(answer) = prompt(input, message)? else {
			return Ok(None);
		};
		match answer.parse::<usize>() {
			Ok(value) if valid(value) => return Ok(Some(value)),
			_ => println!("{retry}"),
		}
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let config = config::from_env()?;
	let mut rng = match config.rng_seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	let stdin = io::stdin();
	let mut input = stdin.lock();

	// ---------- SETTINGS ----------
	let Some(order) = prompt_number(
		&mut input,
		&format!("Type the order of the Markov chain [{MIN_ORDER}-{MAX_ORDER}]: "),
		|order| (MIN_ORDER..=MAX_ORDER).contains(&order),
		&format!("Order must be a number between {MIN_ORDER} and {MAX_ORDER}, try again."),
	)?
	else {
		return Ok(());
	};

	let Some(sentences) = prompt_number(
		&mut input,
		"Type the number of sentences to generate [>0]: ",
		|sentences| sentences > 0,
		"Input must be a number bigger than 0, try again.",
	)?
	else {
		return Ok(());
	};

	let corpora = list_corpora(&config.corpus_root)?;
	if corpora.is_empty() {
		println!("No corpus found in {}", config.corpus_root.display());
		return Ok(());
	}
	let choices = corpora.iter().map(|c| format!("'{c}'")).collect::<Vec<_>>().join(", ");
	let corpus = loop {
		let Some(answer) = prompt(&mut input, &format!("Type the name of the corpus to train on [{choices}]: "))? else {
			return Ok(());
		};
		match find_corpus(&config.corpus_root, &answer)? {
			Some(corpus) => break corpus,
			None => println!("Input must be one of {choices}, try again."),
		}
	};

	// ---------- TRAINING ----------
	let chain = match train_corpus(order, config.corpus_root.join(&corpus)) {
		Ok(chain) => chain,
		Err(e) => {
			println!("{e}");
			return Ok(());
		}
	};
	let statistics = chain.statistics();
	log::info!(
		"trained '{}': {} states, {} transitions",
		corpus,
		statistics.state_count,
		statistics.transition_count
	);

	if log::log_enabled!(log::Level::Trace) {
		for (context, state) in chain.states() {
			log::trace!("{context} : {state}");
		}
	}

	// ---------- GENERATION ----------
	let rule = "-".repeat(25);
	loop {
		let message = format!(
			"Type {order} word(s) for the first state of the model, or nothing for a random start: "
		);
		let Some(seed) = prompt(&mut input, &message)? else {
			return Ok(());
		};

		let result = GenerationInput::new(sentences)
			.map_err(MarkovError::from)
			.and_then(|generation| {
				let generation = generation
					.with_seed(StartSeed::from_text(&seed))
					.with_max_steps(config.max_steps);
				Generator::new(&chain, &mut rng).generate(&generation)
			});

		match result {
			Ok(tokens) => println!("{rule}\n{}\n{rule}", format_lyrics(&tokens)),
			Err(e) => println!("{e}"),
		}
	}
}
