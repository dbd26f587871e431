//! Runtime configuration for the front ends.
//!
//! Values come from `LYRICS_GEN_*` environment variables via [`from_env`];
//! unset variables fall back to [`Config::default`].

use std::path::PathBuf;

use thiserror::Error;

use crate::model::generation_input::DEFAULT_MAX_STEPS;

/// Prefix shared by every environment variable read here.
pub const ENV_PREFIX: &str = "LYRICS_GEN_";

pub const ENV_CORPUS_ROOT: &str = "CORPUS_ROOT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_MAX_STEPS: &str = "MAX_STEPS";
pub const ENV_RNG_SEED: &str = "RNG_SEED";

pub const DEFAULT_CORPUS_ROOT: &str = "./lyrics";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Orders accepted by the front ends.
pub const MIN_ORDER: usize = 1;
pub const MAX_ORDER: usize = 10;

/// Errors raised while reading the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	#[error("environment variable {key}: {message}")]
	EnvVar { key: String, message: String },

	#[error("environment variable {key}={value:?} is invalid: {message}")]
	Parse { key: String, value: String, message: String },
}

/// Settings shared by the CLI and the HTTP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	/// Directory holding one sub-directory per corpus.
	pub corpus_root: PathBuf,
	/// Address the server binds to.
	pub host: String,
	pub port: u16,
	/// Step cap applied to every generation.
	pub max_steps: usize,
	/// Fixed seed for reproducible output; `None` draws from the OS.
	pub rng_seed: Option<u64>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			corpus_root: PathBuf::from(DEFAULT_CORPUS_ROOT),
			host: DEFAULT_HOST.to_owned(),
			port: DEFAULT_PORT,
			max_steps: DEFAULT_MAX_STEPS,
			rng_seed: None,
		}
	}
}

/// Returns the full environment variable key for a suffix (`PORT` → `LYRICS_GEN_PORT`).
pub fn env_key(suffix: &str) -> String {
	format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string, `None` if unset.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
	match std::env::var(key) {
		Ok(s) => Ok(Some(s)),
		Err(std::env::VarError::NotPresent) => Ok(None),
		Err(e) => Err(ConfigError::EnvVar { key: key.to_owned(), message: e.to_string() }),
	}
}

/// Reads an environment variable and parses it into `T`, `None` if unset.
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
	T: std::str::FromStr,
	T::Err: std::fmt::Display,
{
	let Some(value) = env_string(key)? else {
		return Ok(None);
	};
	parse_value(key, value).map(Some)
}

fn parse_value<T>(key: &str, value: String) -> Result<T, ConfigError>
where
	T: std::str::FromStr,
	T::Err: std::fmt::Display,
{
	value.trim().parse().map_err(|e: T::Err| ConfigError::Parse {
		key: key.to_owned(),
		value: value.clone(),
		message: e.to_string(),
	})
}

/// Builds [`Config`] from the environment.
///
/// # Errors
/// Returns [`ConfigError`] if a set variable cannot be parsed.
pub fn from_env() -> Result<Config, ConfigError> {
	from_lookup(|suffix| {
		let key = env_key(suffix);
		env_string(&key).map(|value| value.map(|value| (key, value)))
	})
}

/// Builds [`Config`] from any key lookup (the environment in production).
fn from_lookup<F>(mut lookup: F) -> Result<Config, ConfigError>
where
	F: FnMut(&str) -> Result<Option<(String, String)>, ConfigError>,
{
	let default = Config::default();

	let corpus_root = lookup(ENV_CORPUS_ROOT)?
		.map(|(_, value)| PathBuf::from(value))
		.unwrap_or(default.corpus_root);
	let host = lookup(ENV_HOST)?.map(|(_, value)| value).unwrap_or(default.host);
	let port = match lookup(ENV_PORT)? {
		Some((key, value)) => parse_value(&key, value)?,
		None => default.port,
	};
	let max_steps = match lookup(ENV_MAX_STEPS)? {
		Some((key, value)) => parse_value::<usize>(&key, value)?.max(1),
		None => default.max_steps,
	};
	let rng_seed = match lookup(ENV_RNG_SEED)? {
		Some((key, value)) => Some(parse_value(&key, value)?),
		None => default.rng_seed,
	};

	Ok(Config { corpus_root, host, port, max_steps, rng_seed })
}
