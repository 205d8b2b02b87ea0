use bigint::BigInt;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand_core::RngCore;
use sampling::Source;

fn random_operand(source: &mut Source, digits: usize) -> BigInt {
    let mut n = BigInt::zero();
    for _ in 0..digits {
        n = n.shl(32).add(&BigInt::from_u64(source.next_u32() as u64));
    }
    n
}

fn mul(c: &mut Criterion) {
    let mut source = Source::new([0u8; 32]);
    let mut group = c.benchmark_group("mul");

    for log_digits in 4..11 {
        let digits: usize = 1 << log_digits;
        let a = random_operand(&mut source, digits);
        let b = random_operand(&mut source, digits);

        group.bench_with_input(
            BenchmarkId::new("schoolbook", digits),
            &(),
            |bench, _| bench.iter(|| a.mul(&b)),
        );
        group.bench_with_input(
            BenchmarkId::new("karatsuba", digits),
            &(),
            |bench, _| bench.iter(|| a.karatsuba_mul(&b)),
        );
    }
    group.finish();
}

criterion_group!(benches, mul);
criterion_main!(benches);
