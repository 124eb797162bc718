//! Benchmarking counting and duplicate detection for hashable items

use std::collections::HashMap;

use divan::{Bencher, black_box};
use rand::{distr::Uniform, prelude::*, rngs::SmallRng};
use tally::prelude::*;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[1 << 12, 1 << 16, 1 << 20];

fn gen_data(size: usize) -> Vec<u32> {
    // Roughly half of the values repeat at this range
    Uniform::new(0, size as u32)
        .unwrap()
        .sample_iter(&mut SmallRng::seed_from_u64(42))
        .take(size)
        .collect()
}

#[divan::bench(args = SIZES)]
fn tally(bencher: Bencher, size: usize) {
    let data = gen_data(size);
    bencher.bench_local(|| {
        let counts: HashMap<u32, usize> =
            black_box(&data).iter().copied().into_hash_iter().tally();
        counts
    });
}

#[divan::bench(args = SIZES)]
fn duplicates(bencher: Bencher, size: usize) {
    let data = gen_data(size);
    bencher.bench_local(|| duplicates_by_key(black_box(&data), |&x| x).len());
}
