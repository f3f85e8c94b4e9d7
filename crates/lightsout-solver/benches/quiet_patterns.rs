//! Benchmarks for quiet-pattern extraction and press minimization.
//!
//! # Benchmarks
//!
//! - **`quiet_patterns_compute`**: Full extraction (adjacency build plus
//!   Gauss–Jordan reduction) for several board sizes. The 9×9 case reduces
//!   an 81×81 matrix and dominates engine start-up cost.
//! - **`optimizer_minimize`**: Exact minimization of random press vectors
//!   against the precomputed 9×9 basis (dimension 8, so a 256-candidate
//!   span enumeration).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench quiet_patterns
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use lightsout_core::{BitGrid, BoardSize};
use lightsout_solver::{Optimizer, QuietPatterns};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

fn bench_compute(c: &mut Criterion) {
    for n in [5, 7, 9] {
        let size = BoardSize::new(n).unwrap();
        c.bench_with_input(
            BenchmarkId::new("quiet_patterns_compute", format!("{n}x{n}")),
            &size,
            |b, &size| {
                b.iter(|| QuietPatterns::compute(hint::black_box(size)));
            },
        );
    }
}

fn bench_minimize(c: &mut Criterion) {
    let size = BoardSize::new(9).unwrap();
    let patterns = QuietPatterns::compute(size);
    let optimizer = Optimizer::new(&patterns);
    let mut rng = Pcg64Mcg::seed_from_u64(0x11ce_09b3);

    c.bench_function("optimizer_minimize/9x9", |b| {
        b.iter_batched(
            || {
                let mut presses = BitGrid::new(size);
                for pos in size.positions() {
                    if rng.random::<bool>() {
                        presses.set(pos, true).unwrap();
                    }
                }
                presses
            },
            |presses| optimizer.minimize(&presses),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_compute, bench_minimize);
criterion_main!(benches);
