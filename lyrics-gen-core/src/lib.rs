//! Markov chain lyrics generation library.
//!
//! This crate provides a word-level Markov chain text generator including:
//! - Fixed-order chains trained on tokenized text
//! - Frequency-proportional random walks that stop after a number of sentences
//! - Text plumbing around the chain: normalization, tokenization, formatting
//! - Corpus loading from a directory of text files
//! - Environment-based configuration for the front ends

/// Chain model, training and generation.
pub mod model;

/// Normalization, tokenization and formatting of lyrics text.
pub mod text;

/// Corpus discovery and loading.
pub mod corpus;

/// Runtime configuration read from the environment.
pub mod config;

/// Error types shared by the whole crate.
pub mod error;

pub use error::{InputError, MarkovError};
