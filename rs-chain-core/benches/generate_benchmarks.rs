use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rs_chain_core::model::generator::Generator;
use rs_chain_core::model::transition_map::TransitionMap;

fn make_corpus(count: usize) -> Vec<String> {
	let vocab = [
		"the", "a", "cat", "dog", "sat", "ran", "on", "under", "mat", "tree", "slept", "fast",
	];
	let mut rng = StdRng::seed_from_u64(42);
	(0..count)
		.map(|_| vocab[rng.random_range(0..vocab.len())].to_owned())
		.collect()
}

fn bench_build(c: &mut Criterion) {
	let corpus = make_corpus(10_000);

	c.bench_function("transition map build (10K tokens)", |b| {
		b.iter(|| TransitionMap::build(black_box(&corpus)))
	});
}

fn bench_generate(c: &mut Criterion) {
	let generator = Generator::from_corpus(make_corpus(10_000));

	c.bench_function("generate (target 50, dense map)", |b| {
		b.iter(|| {
			let mut rng = StdRng::seed_from_u64(7);
			generator.generate_with(&mut rng, black_box(50)).unwrap()
		})
	});
}

fn bench_backtracking(c: &mut Criterion) {
	// Mostly trap starts: 200 two-token sequences that dead-end right
	// away, plus one 64-token chain long enough to carry a target of 50.
	let mut generator = Generator::new();
	for i in 0..200 {
		generator.add_sequence([format!("dead{i}"), format!("end{i}")]);
	}
	let chain: Vec<String> = (0..64).map(|i| format!("hub{i}")).collect();
	generator.add_sequence(&chain);

	c.bench_function("generate with dead-end retries (200 traps)", |b| {
		b.iter(|| {
			let mut rng = StdRng::seed_from_u64(21);
			generator.generate_with(&mut rng, black_box(50)).unwrap()
		})
	});
}

criterion_group!(benches, bench_build, bench_generate, bench_backtracking);
criterion_main!(benches);
