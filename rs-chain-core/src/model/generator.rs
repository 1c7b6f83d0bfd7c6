use rand::Rng;
use thiserror::Error;

use super::search;
use super::transition_map::TransitionMap;

/// Failure signal of sequence generation.
///
/// Carries the kind of failure, not a formatted report; front ends
/// decide how to present it (exit code, HTTP status, log line).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
	/// No token chain of the requested length exists in the model.
	///
	/// The model and the request are both valid; the length is simply
	/// unsatisfiable. By the time this is returned the search has
	/// already tried every distinct branch at every depth, so callers
	/// should not retry with the same model and length.
	#[error("no sequence of length {target} exists in the model")]
	NotFound { target: usize },
}

/// High-level generator owning a first-order transition model.
///
/// # Responsibilities
/// - Build and grow the `TransitionMap` from token sequences
/// - Run the backtracking search from an empty prefix
/// - Turn search exhaustion into a typed `GenerateError`
///
/// # Invariants
/// - The map is read-only during a generation call (`generate` takes
///   `&self`), so one generator can serve concurrent callers behind a
///   shared reference or a lock without further discipline.
#[derive(Clone, Debug, Default)]
pub struct Generator {
	map: TransitionMap,
}

impl Generator {
	/// Creates a generator with an empty model.
	///
	/// Until a corpus is ingested, any positive target fails with
	/// `NotFound` (there is no eligible start token).
	pub fn new() -> Self {
		Self { map: TransitionMap::new() }
	}

	/// Creates a generator trained on a single token sequence.
	pub fn from_corpus<I, S>(corpus: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self { map: TransitionMap::build(corpus) }
	}

	/// Trains the model on one more token sequence.
	///
	/// Sequences stay independent: no transition is invented across the
	/// boundary between two calls. This is how several corpus files are
	/// combined into one model.
	pub fn add_sequence<I, S>(&mut self, corpus: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.map.add_sequence(corpus);
	}

	/// Read access to the learned transition map.
	pub fn map(&self) -> &TransitionMap {
		&self.map
	}

	/// Generates a sequence of exactly `target` tokens.
	///
	/// Every consecutive pair of the result is a transition observed in
	/// the training corpora. A `target` of zero yields the empty
	/// sequence. Whenever at least one length-exact chain exists in the
	/// model, one is found; otherwise the call fails with `NotFound`
	/// and retrying is pointless (the search exhausts every branch
	/// before giving up).
	///
	/// Uses the thread-local random source; results differ between
	/// calls. See `generate_with` for reproducible generation.
	///
	/// # Notes
	/// - Recursion depth equals `target`, so the call stack bounds the
	///   practical target length. Services accepting untrusted lengths
	///   should cap them (the bundled HTTP server does).
	///
	/// # Errors
	/// Returns `GenerateError::NotFound` when no chain of length
	/// `target` exists in the model.
	pub fn generate(&self, target: usize) -> Result<Vec<String>, GenerateError> {
		self.generate_with(&mut rand::rng(), target)
	}

	/// Generates a sequence of exactly `target` tokens using the given
	/// random source.
	///
	/// Same contract as `generate`; pass a seeded rng for reproducible
	/// output in tests.
	pub fn generate_with<R: Rng>(
		&self,
		rng: &mut R,
		target: usize,
	) -> Result<Vec<String>, GenerateError> {
		// No capacity hint from `target`: an unsatisfiable request must
		// fail through the search, not through the allocator.
		let mut sequence = Vec::new();
		if search::extend(rng, &mut sequence, target, &self.map) {
			Ok(sequence)
		} else {
			Err(GenerateError::NotFound { target })
		}
	}
}
