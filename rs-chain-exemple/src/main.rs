use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_chain_core::io::read_file;
use rs_chain_core::model::generator::Generator;

#[derive(Parser)]
#[command(name = "rs-chain-exemple", version, about = "Generate token chains from a text corpus")]
struct Cli {
    #[arg(help = "Path to a whitespace-separated text corpus")]
    corpus: PathBuf,

    #[arg(short, long, default_value_t = 5, help = "Tokens per generated chain")]
    length: usize,

    #[arg(short, long, default_value_t = 1, help = "Number of chains to generate")]
    count: usize,

    #[arg(short, long, help = "Fix the rng seed for reproducible output")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The whole file is one training sequence of whitespace-separated tokens
    let contents = read_file(&cli.corpus)
        .with_context(|| format!("Failed to read corpus from {}", cli.corpus.display()))?;
    let generator = Generator::from_corpus(contents.split_whitespace());

    println!("Learned {} distinct tokens", generator.map().len());

    for line in generation_report(&generator, cli.length, cli.count, cli.seed) {
        println!("{line}");
    }

    Ok(())
}

/// One report line per requested chain.
///
/// An unsatisfiable length is a normal outcome reported on its own
/// line; the run continues with the next attempt and still exits zero.
/// Only I/O and argument problems end the program early.
fn generation_report(
    generator: &Generator,
    length: usize,
    count: usize,
    seed: Option<u64>,
) -> Vec<String> {
    // A fixed seed makes repeated runs print the same chains
    let mut seeded = seed.map(StdRng::seed_from_u64);

    (0..count)
        .map(|i| {
            let result = match seeded.as_mut() {
                Some(rng) => generator.generate_with(rng, length),
                None => generator.generate(length),
            };
            match result {
                Ok(chain) => format!("Generated chain {}: {}", i + 1, chain.join(" ")),
                Err(e) => format!("Chain {} not generated: {}", i + 1, e),
            }
        })
        .collect()
}
