//! Probabilistic primality testing (Miller-Rabin) plus the deterministic
//! u64 variant used by NTT prime discovery.

use crate::modular::{mod_exp, reduce};
use crate::Error;
use bigint::BigInt;
use rand_core::RngCore;
use sampling::Source;

/// Uniform BigInt in [0, bound) by top-digit-masked rejection sampling.
/// Requires bound > 0.
pub fn random_below(bound: &BigInt, source: &mut Source) -> Result<BigInt, Error> {
    if bound.is_zero() || bound.is_negative() {
        return Err(Error::NegativeInput);
    }
    let bits: usize = bound.bit_length();
    let top_bits: u32 = ((bits + 31) % 32 + 1) as u32;
    let mask: u32 = if top_bits == 32 {
        u32::MAX
    } else {
        (1u32 << top_bits) - 1
    };
    let digits: usize = (bits + 31) / 32;
    loop {
        let mut candidate = BigInt::zero();
        for i in 0..digits {
            let mut d: u32 = source.next_u32();
            if i == digits - 1 {
                d &= mask;
            }
            candidate = candidate.add(&BigInt::from_u64(d as u64).shl(32 * i));
        }
        if candidate < *bound {
            return Ok(candidate);
        }
    }
}

/// Miller-Rabin probabilistic primality test with `iterations` random
/// witnesses drawn from `source`. Returns true for "probably prime" with
/// false-positive probability at most 4^-iterations.
pub fn miller_rabin(n: &BigInt, iterations: usize, source: &mut Source) -> Result<bool, Error> {
    if n.is_negative() {
        return Err(Error::NegativeInput);
    }
    let two = BigInt::from_u64(2);
    let three = BigInt::from_u64(3);
    if *n < two {
        return Ok(false);
    }
    if *n == two || *n == three {
        return Ok(true);
    }
    if n.is_even() {
        return Ok(false);
    }

    // n - 1 = 2^r * d with d odd.
    let n_minus_1: BigInt = n.sub(&BigInt::one());
    let mut d: BigInt = n_minus_1.clone();
    let mut r: usize = 0;
    while d.is_even() {
        d = d.shr(1);
        r += 1;
    }

    let witness_range: BigInt = n.sub(&three); // witnesses in [2, n-2]
    'witness: for _ in 0..iterations {
        let a: BigInt = random_below(&witness_range, source)?.add(&two);
        let mut x: BigInt = mod_exp(&a, &d, n)?;
        if x == BigInt::one() || x == n_minus_1 {
            continue;
        }
        for _ in 0..r - 1 {
            x = reduce(&x.mul(&x), n)?;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return Ok(false);
    }
    Ok(true)
}

pub(crate) fn mod_mul_u64(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

pub(crate) fn mod_pow_u64(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc: u64 = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mod_mul_u64(acc, base, m);
        }
        base = mod_mul_u64(base, base, m);
        exp >>= 1;
    }
    acc
}

// This witness set decides primality for every n < 2^64
// (Sorenson & Webster).
const U64_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic Miller-Rabin for u64 candidates. Used by NTT prime
/// discovery so that context construction needs no random source.
pub fn is_prime_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &U64_WITNESSES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    let r: u32 = (n - 1).trailing_zeros();
    let d: u64 = (n - 1) >> r;
    'witness: for &a in &U64_WITNESSES {
        let mut x: u64 = mod_pow_u64(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 0..r - 1 {
            x = mod_mul_u64(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
