//! Driver binary: fills a sequence from a seeded generator, sorts it in
//! place and reports the operation totals plus the verifier result.
//!
//! Usage: `sort_count [count] [seed]`, defaulting to 10000 and 123456.

use std::env;
use std::process::ExitCode;

use sort_count::patterns::SeededValues;
use sort_count::{quicksort, verify};

const DEFAULT_COUNT: usize = 10_000;
const DEFAULT_SEED: u64 = 123_456;

fn parse_args() -> Result<(usize, u64), String> {
    let args = env::args().collect::<Vec<_>>();

    let count = match args.get(1) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("invalid element count: {raw}"))?,
        None => DEFAULT_COUNT,
    };

    let seed = match args.get(2) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| format!("invalid seed: {raw}"))?,
        None => DEFAULT_SEED,
    };

    Ok((count, seed))
}

fn run(count: usize, seed: u64) -> Result<bool, String> {
    // The requested count is caller-controlled, surface allocation failure
    // instead of aborting.
    let mut v: Vec<i32> = Vec::new();
    v.try_reserve_exact(count)
        .map_err(|err| format!("failed to allocate {count} elements: {err}"))?;
    v.extend(SeededValues::new(seed).take(count));

    println!("Sorting {count} random numbers (seed {seed})");

    let counts = quicksort::sort(&mut v);
    let sorted = verify::is_sorted(&v);

    println!("Sorted, needed {counts}.");
    println!("Verify {}.", if sorted { "succeeded" } else { "failed" });

    Ok(sorted)
}

fn main() -> ExitCode {
    let (count, seed) = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(count, seed) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
