use std::collections::HashMap;

/// First-order transition model over opaque string tokens.
///
/// The `TransitionMap` stores, for every token observed in the training
/// corpora, the ordered list of tokens seen immediately after it.
/// Duplicates are preserved on purpose: a successor recorded twice
/// occupies two slots and is twice as likely to be drawn during
/// generation. Frequency is encoded by repetition, never by counts.
///
/// # Responsibilities
/// - Record adjacent-pair transitions from ordered token sequences
/// - Guarantee an entry for every observed token, terminal ones included
/// - Serve read-only successor lookups to the search
///
/// # Invariants
/// - Every distinct token of every ingested sequence is a key
/// - A token never observed in a non-terminal position maps to an empty
///   successor list
/// - Successor lists preserve observation order and repetition
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionMap {
	/// Observed successors indexed by token, duplicates preserved.
	/// Example: { "a" => ["b", "c"], "c" => [] }
	transitions: HashMap<String, Vec<String>>,
}

impl TransitionMap {
	/// Creates an empty transition map.
	pub fn new() -> Self {
		Self { transitions: HashMap::new() }
	}

	/// Builds a transition map from a single ordered token sequence.
	///
	/// Equivalent to `new` followed by one `add_sequence`. An empty
	/// corpus yields an empty map; that is a valid degenerate input and
	/// the caller decides what to do with it.
	pub fn build<I, S>(corpus: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut map = Self::new();
		map.add_sequence(corpus);
		map
	}

	/// Records all adjacent-pair transitions of one ordered token sequence.
	///
	/// For each position except the last, the following token is appended
	/// to the successor list of the current one. The final token always
	/// ends up with an entry of its own, empty if it was never observed
	/// in a non-terminal position.
	///
	/// Sequences are independent: no transition is recorded from the last
	/// token of a previous call to the first token of this one, so each
	/// corpus file can be ingested as its own sequence without inventing
	/// an adjacency across the boundary.
	///
	/// # Notes
	/// - An empty sequence is a no-op, not an error.
	/// - Tokens are opaque: no case folding or normalization is applied.
	pub fn add_sequence<I, S>(&mut self, corpus: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut tokens = corpus.into_iter().peekable();
		while let Some(token) = tokens.next() {
			// Entry first: even a terminal token must be a key.
			let successors = self.transitions.entry(token.as_ref().to_owned()).or_default();
			if let Some(next) = tokens.peek() {
				successors.push(next.as_ref().to_owned());
			}
		}
	}

	/// Returns the recorded successors of `token`, or `None` for a token
	/// never observed in any ingested sequence.
	///
	/// An empty slice means the token was observed, but only in terminal
	/// position: a dead end for any search that still has to grow.
	pub fn successors(&self, token: &str) -> Option<&[String]> {
		self.transitions.get(token).map(Vec::as_slice)
	}

	/// Iterates over every distinct token observed so far.
	///
	/// Iteration order is unspecified.
	pub fn tokens(&self) -> impl Iterator<Item = &str> {
		self.transitions.keys().map(String::as_str)
	}

	/// Number of distinct tokens in the map.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	/// True if nothing has been ingested (or only empty sequences).
	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}
}
