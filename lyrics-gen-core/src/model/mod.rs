//! Top-level module of the Markov chain system.
//!
//! This module provides:
//! - Immutable token contexts used as chain keys (`Context`)
//! - Per-context transition tables (`State`)
//! - The fixed-order chain and its trainer (`MarkovChain`)
//! - Generation parameters (`GenerationInput`)
//! - The random walk itself (`Generator`) and its randomness seam (`RandomSource`)

/// Fixed-length token tuple with structural equality and hashing.
pub mod context;

/// Random walk over a trained chain, with sentence counting and trimming.
pub mod generator;

/// Generation parameters: sentence budget, start seed and step cap.
pub mod generation_input;

/// Fixed-order Markov chain.
///
/// Handles training from token sequences and read-only lookups.
pub mod markov_chain;

/// Randomness abstraction consumed by the generator.
pub mod random;

/// Transition table of a single context.
///
/// Tracks followup counts and supports weighted random sampling.
pub mod state;
