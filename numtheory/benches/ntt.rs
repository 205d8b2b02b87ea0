use bigint::BigInt;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numtheory::{ntt_mul, NttContext};
use rand_core::RngCore;
use sampling::Source;

fn random_operand(source: &mut Source, digits: usize) -> BigInt {
    let d: Vec<u32> = (0..digits).map(|_| source.next_u32() | 1).collect();
    BigInt::from_digits_le(d, false)
}

fn transform(c: &mut Criterion) {
    let mut source = Source::new([0u8; 32]);
    let mut group = c.benchmark_group("transform");
    for log_n in 8..14 {
        let n: usize = 1 << log_n;
        let ctx = NttContext::new(n).unwrap();
        let x: Vec<u64> = (0..n).map(|_| source.next_u64() % ctx.prime()).collect();
        group.bench_with_input(BenchmarkId::new("forward", n), &(), |b, _| {
            b.iter(|| ctx.forward(&x).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("inverse", n), &(), |b, _| {
            b.iter(|| ctx.inverse(&x).unwrap())
        });
    }
    group.finish();
}

fn multiply(c: &mut Criterion) {
    let mut source = Source::new([1u8; 32]);
    let mut group = c.benchmark_group("multiply");
    for log_digits in 6..11 {
        let digits: usize = 1 << log_digits;
        let a = random_operand(&mut source, digits);
        let b = random_operand(&mut source, digits);
        group.bench_with_input(BenchmarkId::new("ntt", digits), &(), |bench, _| {
            bench.iter(|| ntt_mul(&a, &b).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("karatsuba", digits), &(), |bench, _| {
            bench.iter(|| a.karatsuba_mul(&b))
        });
    }
    group.finish();
}

criterion_group!(benches, transform, multiply);
criterion_main!(benches);
