use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lattice::{lll_reduce, LatticeBasis};

/// Upper-triangular integer basis with unit diagonal, so full rank is
/// guaranteed whatever the off-diagonal fill.
fn skewed_basis(rank: usize, scale: usize) -> LatticeBasis {
    let rows: Vec<Vec<i64>> = (0..rank)
        .map(|i| {
            (0..rank)
                .map(|j| {
                    if j < i {
                        0
                    } else if j == i {
                        1
                    } else {
                        ((i * 31 + j * 17) % 23) as i64 - 11
                    }
                })
                .collect()
        })
        .collect();
    LatticeBasis::from_i64_rows(&rows, scale).unwrap()
}

fn reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("lll");
    for rank in [3usize, 5, 8] {
        let basis = skewed_basis(rank, 96);
        group.bench_with_input(BenchmarkId::new("reduce", rank), &basis, |b, basis| {
            b.iter(|| {
                let mut work = basis.clone();
                lll_reduce(&mut work, 0.75, 100_000).unwrap().unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, reduce);
criterion_main!(benches);
