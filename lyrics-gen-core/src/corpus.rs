use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::{fs, io, thread};

use crate::error::MarkovError;
use crate::model::markov_chain::MarkovChain;
use crate::text::normalize_lines;

/// Lists the corpora available under `root`.
///
/// A corpus is a sub-directory; its name is the directory name. Names are
/// sorted.
pub fn list_corpora<P: AsRef<Path>>(root: P) -> io::Result<Vec<String>> {
	let mut corpora = Vec::new();

	for entry in fs::read_dir(root)? {
		let path = entry?.path();
		if path.is_dir() {
			if let Some(name) = path.file_name() {
				corpora.push(name.to_string_lossy().to_string());
			}
		}
	}

	corpora.sort();
	Ok(corpora)
}

/// Finds the corpus matching `name` regardless of case.
///
/// Returns the directory name as stored on disk, `None` if no corpus matches.
pub fn find_corpus<P: AsRef<Path>>(root: P, name: &str) -> io::Result<Option<String>> {
	let name = name.trim().to_lowercase();
	Ok(list_corpora(root)?.into_iter().find(|corpus| corpus.to_lowercase() == name))
}

/// Lists the files of a corpus directory, sorted by path.
///
/// Sub-directories are ignored.
pub fn list_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Reads a lyrics file and normalizes its lines.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
	let bytes = fs::read(path)?;
	Ok(normalize_lines(&String::from_utf8_lossy(&bytes)))
}

/// Reads every file of a corpus directory into one normalized text.
///
/// # Behavior
/// - Splits the file list into chunks (based on CPU cores).
/// - Spawns one thread per chunk to read and normalize its files.
/// - Concatenates the results in file order, so the text does not depend on
///   thread scheduling.
///
/// # Errors
/// Returns [`MarkovError::Io`] if the directory or any file cannot be read.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> Result<String, MarkovError> {
	let dir = dir.as_ref();
	let files = list_files(dir)?;
	if files.is_empty() {
		log::debug!("load_corpus: {} holds no file", dir.display());
		return Ok(String::new());
	}

	let chunks = num_cpus::get().max(1);
	let chunk_size = files.len().div_ceil(chunks);

	let (tx, rx) = mpsc::channel();
	let mut spawned = 0;
	for (index, chunk) in files.chunks(chunk_size).enumerate() {
		let tx = tx.clone();
		let chunk: Vec<PathBuf> = chunk.to_vec();
		spawned += 1;

		thread::spawn(move || {
			let text = chunk.iter().map(read_file).collect::<io::Result<String>>();
			// The receiver outlives every sender
			let _ = tx.send((index, text));
		});
	}
	drop(tx);

	let mut parts: Vec<Option<String>> = vec![None; spawned];
	for (index, text) in rx.iter() {
		parts[index] = Some(text?);
	}

	let mut corpus = String::new();
	for part in parts {
		let part = part.ok_or_else(|| io::Error::other("corpus reader thread stopped early"))?;
		corpus.push_str(&part);
	}

	log::debug!(
		"load_corpus: {} files, {} bytes from {}",
		files.len(),
		corpus.len(),
		dir.display()
	);
	Ok(corpus)
}

/// Builds a chain of the given order from a corpus directory.
///
/// All files are concatenated before training, so windows may span two
/// files, exactly as if the corpus were one document.
///
/// # Errors
/// - [`MarkovError::Input`] if `order` is 0 or the corpus holds no token
/// - [`MarkovError::Io`] if the corpus cannot be read
pub fn train_corpus<P: AsRef<Path>>(order: usize, dir: P) -> Result<MarkovChain, MarkovError> {
	let mut chain = MarkovChain::new(order)?;
	let corpus = load_corpus(dir)?;
	chain.train_text(&corpus)?;
	Ok(chain)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_directory_is_an_io_error() {
		let err = load_corpus("this/directory/does/not/exist").unwrap_err();
		assert!(matches!(err, MarkovError::Io(_)));
	}
}
