//! Top-level module for the word-chain generation system.
//!
//! This module provides a first-order sequence sampler, including:
//! - The learned transition model (`TransitionMap`)
//! - A randomized backtracking search (internal)
//! - A high-level generation interface (`Generator`)

/// High-level interface for generating length-exact token sequences.
///
/// Exposes corpus training, generation with the thread-local random
/// source, and generation with an injected one.
pub mod generator;

/// First-order transition model (token to observed successors).
///
/// Handles corpus ingestion, successor lookups, and the invariants the
/// search relies on.
pub mod transition_map;

/// Internal randomized backtracking search.
///
/// Extends a partial sequence to a target length or proves that no
/// extension exists. This module is not exposed publicly.
mod search;
