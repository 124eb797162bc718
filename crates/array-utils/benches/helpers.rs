//! Benchmarking the sequence helpers on mixed numeric and string values

use std::sync::LazyLock;

use array_utils::{Value, count, find_duplicates, sum};
use divan::{Bencher, black_box};
use rand::{prelude::*, rngs::SmallRng};

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[1 << 10, 1 << 14, 1 << 18];

fn gen_data(size: usize) -> Vec<Value> {
    // Use precomputed data to avoid generating data for each benchmark run
    static BENCH_DATA: LazyLock<Vec<Value>> = LazyLock::new(|| {
        let max = SIZES.iter().copied().max().unwrap_or_default();
        let mut rng = SmallRng::seed_from_u64(42);
        (0..max)
            .map(|_| {
                let n = rng.random_range(0..max as u32 / 2);
                if rng.random_bool(0.5) {
                    Value::from(n)
                } else {
                    Value::from(n.to_string())
                }
            })
            .collect()
    });

    BENCH_DATA[..size].to_vec()
}

#[divan::bench(args = SIZES)]
fn bench_sum(bencher: Bencher, size: usize) {
    let data = gen_data(size);
    bencher.bench_local(|| sum(black_box(&data)));
}

#[divan::bench(args = SIZES)]
fn bench_find_duplicates(bencher: Bencher, size: usize) {
    let data = gen_data(size);
    bencher.bench_local(|| find_duplicates(black_box(&data)));
}

#[divan::bench(args = SIZES)]
fn bench_count(bencher: Bencher, size: usize) {
    let data = gen_data(size);
    bencher.bench_local(|| count(black_box(&data)));
}
