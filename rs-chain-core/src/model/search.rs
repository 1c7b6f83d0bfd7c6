use std::collections::HashSet;

use rand::Rng;

use super::transition_map::TransitionMap;

/// Draws one candidate uniformly at random by index.
///
/// Duplicates matter: a token occupying two slots is twice as likely to
/// be returned as one occupying a single slot.
///
/// # Panics
/// Panics if `candidates` is empty. An empty candidate set is a dead
/// end, not a drawable state, and callers check for it first.
fn draw<'a, R: Rng>(rng: &mut R, candidates: &[&'a str]) -> &'a str {
	candidates[rng.random_range(0..candidates.len())]
}

/// Extends `partial` to exactly `target` tokens by randomized
/// depth-first search over `map`, backtracking out of dead ends.
///
/// Returns `true` when `partial` holds a full-length path. Returns
/// `false` when no full-length extension exists from the entry state of
/// `partial`; the vector is then restored to exactly that entry state so
/// the parent frame can retry another branch.
///
/// One recursion frame per appended token. The candidate set is the
/// whole token population when the prefix is empty, otherwise the
/// recorded successors of the last token. Each frame keeps its own
/// visited set and redraws, discarding already-visited values, until
/// every distinct candidate has been tried; only then does it give up
/// and propagate the failure upward.
///
/// # Notes
/// - Recursion depth is bounded by `target`.
/// - Dead branches are not memoized, so a failing sub-path can be
///   re-explored from different parents. Acceptable for corpora of
///   modest size.
pub(super) fn extend<R: Rng>(
	rng: &mut R,
	partial: &mut Vec<String>,
	target: usize,
	map: &TransitionMap,
) -> bool {
	if partial.len() == target {
		return true;
	}

	// Empty prefix: any observed token is eligible as a start.
	let candidates: Vec<&str> = match partial.last() {
		None => map.tokens().collect(),
		Some(last) => match map.successors(last) {
			Some(successors) => successors.iter().map(String::as_str).collect(),
			None => Vec::new(),
		},
	};
	if candidates.is_empty() {
		// Dead end. Nothing was drawn, nothing to undo.
		return false;
	}
	// Duplicates collapse for the exhaustion check only.
	let distinct: HashSet<&str> = candidates.iter().copied().collect();

	let first = draw(rng, &candidates);
	let mut visited: HashSet<&str> = HashSet::new();
	visited.insert(first);
	partial.push(first.to_owned());

	while !extend(rng, partial, target, map) {
		if visited.len() == distinct.len() {
			// Every distinct successor failed below this frame.
			partial.pop();
			return false;
		}
		let mut next = draw(rng, &candidates);
		while visited.contains(next) {
			next = draw(rng, &candidates);
		}
		visited.insert(next);
		// The failed recursion restored its own growth, so the last
		// slot is still the one this frame pushed.
		*partial.last_mut().unwrap() = next.to_owned();
	}

	true
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	use super::*;

	fn assert_chain_is_valid(map: &TransitionMap, sequence: &[String]) {
		for pair in sequence.windows(2) {
			let successors = map.successors(&pair[0]).expect("token came from the map");
			assert!(
				successors.contains(&pair[1]),
				"transition {} -> {} was never observed",
				pair[0],
				pair[1]
			);
		}
	}

	#[test]
	fn draw_returns_an_element_of_the_candidates() {
		let mut rng = StdRng::seed_from_u64(1);
		let candidates = ["a", "b", "c"];

		for _ in 0..100 {
			let drawn = draw(&mut rng, &candidates);
			assert!(candidates.contains(&drawn));
		}
	}

	#[test]
	fn draw_weights_candidates_by_slot_count() {
		let mut rng = StdRng::seed_from_u64(2);
		let candidates = ["a", "a", "b"];

		let hits_on_a = (0..3000).filter(|_| draw(&mut rng, &candidates) == "a").count();
		// Expected 2000 of 3000; allow generous slack.
		assert!(
			(1800..=2200).contains(&hits_on_a),
			"uniform-by-index draw looks biased: {hits_on_a}/3000 on the double slot"
		);
	}

	#[test]
	fn target_zero_succeeds_before_any_draw() {
		let mut rng = StdRng::seed_from_u64(3);
		let map = TransitionMap::new();
		let mut partial = Vec::new();

		// An empty map has no drawable candidate; reaching the draw
		// would fail, so success proves the terminal check runs first.
		assert!(extend(&mut rng, &mut partial, 0, &map));
		assert!(partial.is_empty());
	}

	#[test]
	fn dead_end_prefix_fails_and_restores_the_partial() {
		let mut rng = StdRng::seed_from_u64(4);
		let map = TransitionMap::build(["a", "b", "a", "c"]);
		let mut partial = vec!["c".to_owned()];

		assert!(!extend(&mut rng, &mut partial, 2, &map));
		assert_eq!(partial, ["c".to_owned()]);
	}

	#[test]
	fn unknown_prefix_token_is_a_dead_end() {
		let mut rng = StdRng::seed_from_u64(5);
		let map = TransitionMap::build(["a", "b"]);
		let mut partial = vec!["never-seen".to_owned()];

		assert!(!extend(&mut rng, &mut partial, 3, &map));
		assert_eq!(partial, ["never-seen".to_owned()]);
	}

	#[test]
	fn exhausted_search_leaves_an_empty_partial() {
		// x -> [y], y -> []: no chain of three exists anywhere.
		let map = TransitionMap::build(["x", "y"]);

		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let mut partial = Vec::new();
			assert!(!extend(&mut rng, &mut partial, 3, &map));
			assert!(partial.is_empty(), "failed search must undo its growth");
		}
	}

	#[test]
	fn unique_full_length_path_is_always_found() {
		// Only "p q r s" has length four; starts at q, r or s run out
		// of successors and must be backtracked away from.
		let map = TransitionMap::build(["p", "q", "r", "s"]);
		let expected: Vec<String> =
			["p", "q", "r", "s"].iter().map(|s| (*s).to_owned()).collect();

		for seed in 0..50 {
			let mut rng = StdRng::seed_from_u64(seed);
			let mut partial = Vec::new();
			assert!(extend(&mut rng, &mut partial, 4, &map));
			assert_eq!(partial, expected);
		}
	}

	#[test]
	fn extensions_only_use_observed_transitions() {
		let corpus = [
			"this", "is", "a", "sentence", "it", "is", "not", "a", "good", "one", "and",
			"it", "is", "also", "bad",
		];
		let map = TransitionMap::build(corpus);

		for seed in 0..50 {
			let mut rng = StdRng::seed_from_u64(seed);
			let mut partial = Vec::new();
			assert!(extend(&mut rng, &mut partial, 8, &map));
			assert_eq!(partial.len(), 8);
			assert_chain_is_valid(&map, &partial);
		}
	}

	#[test]
	fn deep_targets_walk_a_cycle() {
		// x -> [y], y -> [x]: one frame per token, four hundred deep.
		let map = TransitionMap::build(["x", "y", "x"]);
		let mut rng = StdRng::seed_from_u64(6);
		let mut partial = Vec::new();

		assert!(extend(&mut rng, &mut partial, 400, &map));
		assert_eq!(partial.len(), 400);
		assert_chain_is_valid(&map, &partial);
	}
}
