//! Word-chain sequence generation library.
//!
//! This crate provides a backtracking word-transition sampler including:
//! - First-order transition maps learned from tokenized corpora
//! - Randomized depth-first search for length-exact sequences
//! - A high-level generator interface with a typed failure signal
//! - Utilities for corpus file loading
//!
//! Only the high-level API is exposed publicly. The search internals are
//! kept private to ensure consistency and prevent misuse.

/// Core transition model and generation logic.
///
/// This module exposes the transition map and the generator interface
/// while keeping the search implementation private.
pub mod model;

/// I/O utilities (corpus file loading, path helpers).
///
/// Shared by the command line and HTTP front ends.
pub mod io;
