use bigint::BigInt;
use numtheory::{fast_mul, ntt_mul, Error, NttContext};
use rand_core::RngCore;
use sampling::Source;

fn random_operand(source: &mut Source, digits: usize) -> BigInt {
    let mut d: Vec<u32> = (0..digits).map(|_| source.next_u32()).collect();
    if let Some(last) = d.last_mut() {
        *last |= 1; // keep the top digit nonzero
    }
    let n = BigInt::from_digits_le(d, false);
    if source.next_u32() & 1 == 1 {
        n.neg()
    } else {
        n
    }
}

#[test]
fn context_construction_validates_size() {
    assert_eq!(NttContext::new(0).unwrap_err(), Error::NonPowerOfTwoSize(0));
    assert_eq!(NttContext::new(12).unwrap_err(), Error::NonPowerOfTwoSize(12));
    assert!(NttContext::new(8).is_ok());
}

#[test]
fn context_prime_has_required_form() {
    for size in [8usize, 64, 1024] {
        let ctx = NttContext::new(size).unwrap();
        assert_eq!((ctx.prime() - 1) % size as u64, 0, "size must divide p-1");
        assert!(
            ctx.prime() as u128 > size as u128 * 0xFFFF * 0xFFFF,
            "prime too small for exact convolution"
        );
    }
}

#[test]
fn forward_inverse_round_trip() {
    let ctx = NttContext::new(8).unwrap();
    let x: Vec<u64> = vec![1, 0, 0, 0, 0, 0, 0, 0];
    let fx = ctx.forward(&x).unwrap();
    assert_eq!(ctx.inverse(&fx).unwrap(), x);

    let mut source = Source::new([21u8; 32]);
    for size in [4usize, 16, 256] {
        let ctx = NttContext::new(size).unwrap();
        let x: Vec<u64> = (0..size).map(|_| source.next_u64() % ctx.prime()).collect();
        let fx = ctx.forward(&x).unwrap();
        assert_eq!(ctx.inverse(&fx).unwrap(), x, "round trip at size {}", size);
    }
}

#[test]
fn transform_of_unit_impulse_is_all_ones() {
    let ctx = NttContext::new(8).unwrap();
    let fx = ctx.forward(&[1, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(fx, vec![1u64; 8]);
}

#[test]
fn transform_rejects_wrong_length() {
    let ctx = NttContext::new(8).unwrap();
    assert_eq!(
        ctx.forward(&[1, 2, 3]).unwrap_err(),
        Error::LengthMismatch {
            expected: 8,
            got: 3
        }
    );
}

#[test]
fn ntt_multiplication_matches_schoolbook() {
    let mut source = Source::new([22u8; 32]);
    // Straddle both switchover thresholds.
    for digits in [1usize, 8, 31, 32, 33, 64, 255, 256, 300] {
        let a = random_operand(&mut source, digits);
        let b = random_operand(&mut source, digits);
        let expect = a.mul(&b);
        assert_eq!(ntt_mul(&a, &b).unwrap(), expect, "ntt at {} digits", digits);
        assert_eq!(a.karatsuba_mul(&b), expect, "karatsuba at {} digits", digits);
        assert_eq!(fast_mul(&a, &b).unwrap(), expect, "dispatch at {} digits", digits);
    }
}

#[test]
fn ntt_multiplication_concrete_scenario() {
    let a = BigInt::from_u64(123456789);
    let b = BigInt::from_u64(987654321);
    assert_eq!(
        ntt_mul(&a, &b).unwrap().to_decimal_string(),
        "121932631112635269"
    );
}

#[test]
fn ntt_multiplication_handles_signs_and_zero() {
    let a = BigInt::from_decimal_str("340282366920938463463374607431768211456").unwrap();
    let b = BigInt::from_decimal_str("18446744073709551629").unwrap();
    assert_eq!(ntt_mul(&a.neg(), &b).unwrap(), a.mul(&b).neg());
    assert_eq!(ntt_mul(&a.neg(), &b.neg()).unwrap(), a.mul(&b));
    assert_eq!(ntt_mul(&a, &BigInt::zero()).unwrap(), BigInt::zero());
}
