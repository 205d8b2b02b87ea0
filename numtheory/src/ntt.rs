//! Number Theoretic Transform over a discovered word-sized prime, and the
//! NTT-based BigInt multiply built on it.
//!
//! The context works modulo a prime p = k*2^m + 1 with m at least
//! log2(size), so a primitive size-th root of unity exists. All transform
//! arithmetic is u64 with u128 intermediates; no floating point anywhere.
//!
//! For exact multiplication the convolution coefficients must be
//! recoverable, so operands are split into base-2^16 coefficients and the
//! prime is required to exceed size * (2^16 - 1)^2.

use crate::primality::{is_prime_u64, mod_mul_u64, mod_pow_u64};
use crate::Error;
use bigint::BigInt;
use itertools::izip;

// (2^40 - 1) * 2^21 + 1; 2-adic valuation 21, so it carries primitive
// roots of unity for every power-of-two size up to 2^21.
const KNOWN_PRIME: u64 = 0x1fffffffffe00001;
const KNOWN_PRIME_MAX_SIZE: usize = 1 << 21;

const COEFF_BITS: usize = 16;
const COEFF_MASK: u64 = (1 << COEFF_BITS) - 1;

/// Immutable transform context for one power-of-two size: the prime, a
/// primitive size-th root of unity and the precomputed power tables.
#[derive(Debug)]
pub struct NttContext {
    size: usize,
    prime: u64,
    root: u64,
    roots_forward: Vec<u64>,
    roots_inverse: Vec<u64>,
    size_inv: u64,
}

impl NttContext {
    /// Builds a context for transform length `size` (a power of two >= 2).
    /// Fails with `NoNttPrime`/`NoPrimitiveRoot` when discovery runs out of
    /// candidates, never with a silently unusable context.
    pub fn new(size: usize) -> Result<Self, Error> {
        if size < 2 || !size.is_power_of_two() {
            return Err(Error::NonPowerOfTwoSize(size));
        }

        let prime: u64 = find_prime(size)?;
        let root: u64 = find_primitive_root(prime, size as u64)?;
        let root_inv: u64 = mod_pow_u64(root, prime - 2, prime);

        let mut roots_forward: Vec<u64> = Vec::with_capacity(size);
        let mut roots_inverse: Vec<u64> = Vec::with_capacity(size);
        let (mut wf, mut wi) = (1u64, 1u64);
        for _ in 0..size {
            roots_forward.push(wf);
            roots_inverse.push(wi);
            wf = mod_mul_u64(wf, root, prime);
            wi = mod_mul_u64(wi, root_inv, prime);
        }

        Ok(NttContext {
            size,
            prime,
            root,
            roots_forward,
            roots_inverse,
            size_inv: mod_pow_u64(size as u64, prime - 2, prime),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn prime(&self) -> u64 {
        self.prime
    }

    #[inline]
    pub fn root(&self) -> u64 {
        self.root
    }

    /// Forward transform. Input values are reduced mod p on entry.
    pub fn forward(&self, input: &[u64]) -> Result<Vec<u64>, Error> {
        self.transform(input, &self.roots_forward, false)
    }

    /// Inverse transform; scales every output by size^-1 mod p.
    pub fn inverse(&self, input: &[u64]) -> Result<Vec<u64>, Error> {
        self.transform(input, &self.roots_inverse, true)
    }

    fn transform(&self, input: &[u64], roots: &[u64], scale: bool) -> Result<Vec<u64>, Error> {
        if input.len() != self.size {
            return Err(Error::LengthMismatch {
                expected: self.size,
                got: input.len(),
            });
        }
        let n: usize = self.size;
        let p: u64 = self.prime;
        let log_n: u32 = n.trailing_zeros();

        let mut a: Vec<u64> = input.iter().map(|&x| x % p).collect();

        // Bit-reversal permutation, then iterative Cooley-Tukey butterflies.
        for i in 0..n {
            let j: usize = i.reverse_bits() >> (usize::BITS - log_n);
            if i < j {
                a.swap(i, j);
            }
        }

        let mut len: usize = 2;
        while len <= n {
            let half: usize = len / 2;
            let step: usize = n / len;
            for block in a.chunks_exact_mut(len) {
                let (lo, hi) = block.split_at_mut(half);
                for (j, (u, v)) in izip!(lo.iter_mut(), hi.iter_mut()).enumerate() {
                    let w: u64 = roots[j * step];
                    let t: u64 = mod_mul_u64(*v, w, p);
                    let sum: u64 = add_mod(*u, t, p);
                    let diff: u64 = sub_mod(*u, t, p);
                    *u = sum;
                    *v = diff;
                }
            }
            len <<= 1;
        }

        if scale {
            for x in a.iter_mut() {
                *x = mod_mul_u64(*x, self.size_inv, p);
            }
        }
        Ok(a)
    }
}

#[inline(always)]
fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    let s: u64 = a + b;
    if s >= p {
        s - p
    } else {
        s
    }
}

#[inline(always)]
fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        a + p - b
    }
}

/// Searches for p = k*2^m + 1 with m = log2(size), p prime and large
/// enough that convolution coefficients of base-2^16 operands of this
/// transform size are exact.
fn find_prime(size: usize) -> Result<u64, Error> {
    let required: u64 = coefficient_bound(size);
    if size <= KNOWN_PRIME_MAX_SIZE && KNOWN_PRIME > required {
        return Ok(KNOWN_PRIME);
    }

    let m: u32 = size.trailing_zeros();
    let two_m: u64 = 1u64 << m;
    let k_start: u64 = required / two_m + 1;
    for k in k_start..k_start + 1_000_000 {
        let candidate: u64 = match k.checked_mul(two_m).and_then(|v| v.checked_add(1)) {
            Some(v) if v < 1 << 62 => v,
            _ => return Err(Error::NoNttPrime(size)),
        };
        if is_prime_u64(candidate) {
            return Ok(candidate);
        }
    }
    Err(Error::NoNttPrime(size))
}

#[inline]
fn coefficient_bound(size: usize) -> u64 {
    size as u64 * COEFF_MASK * COEFF_MASK
}

/// Finds a primitive size-th root of unity mod p by locating a generator
/// of the multiplicative group (testing g^((p-1)/q) != 1 for every prime
/// factor q of p-1) and raising it to (p-1)/size.
fn find_primitive_root(p: u64, size: u64) -> Result<u64, Error> {
    debug_assert!((p - 1) % size == 0, "size must divide p-1");
    let factors: Vec<u64> = distinct_prime_factors(p - 1);

    for g in 2..1000u64 {
        if factors
            .iter()
            .all(|&q| mod_pow_u64(g, (p - 1) / q, p) != 1)
        {
            let root: u64 = mod_pow_u64(g, (p - 1) / size, p);
            debug_assert!(mod_pow_u64(root, size, p) == 1);
            debug_assert!(mod_pow_u64(root, size / 2, p) == p - 1);
            return Ok(root);
        }
    }
    Err(Error::NoPrimitiveRoot(p))
}

fn distinct_prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors: Vec<u64> = Vec::new();
    let mut d: u64 = 2;
    while d * d <= n {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// NTT-based multiplication: splits both operands into base-2^16
/// coefficients, zero-pads to the next power of two covering the product,
/// transforms, multiplies pointwise mod p, inverse-transforms and resolves
/// carries back into base-2^32 digits.
pub fn ntt_mul(a: &BigInt, b: &BigInt) -> Result<BigInt, Error> {
    if a.is_zero() || b.is_zero() {
        return Ok(BigInt::zero());
    }

    let ca: Vec<u64> = to_coefficients(a);
    let cb: Vec<u64> = to_coefficients(b);
    let size: usize = (ca.len() + cb.len()).next_power_of_two();

    let ctx = NttContext::new(size)?;
    let mut fa: Vec<u64> = ca;
    let mut fb: Vec<u64> = cb;
    fa.resize(size, 0);
    fb.resize(size, 0);

    let fa = ctx.forward(&fa)?;
    let fb = ctx.forward(&fb)?;
    let pointwise: Vec<u64> = izip!(fa.iter(), fb.iter())
        .map(|(&x, &y)| mod_mul_u64(x, y, ctx.prime))
        .collect();
    let conv: Vec<u64> = ctx.inverse(&pointwise)?;

    Ok(from_coefficients(&conv, a.is_negative() != b.is_negative()))
}

/// Base-2^16 little-endian coefficient expansion of the magnitude.
/// Each base-2^32 digit contributes two coefficients.
fn to_coefficients(n: &BigInt) -> Vec<u64> {
    let mut out: Vec<u64> = Vec::with_capacity(2 * n.digit_len());
    for &d in n.digits() {
        out.push(d as u64 & COEFF_MASK);
        out.push(d as u64 >> COEFF_BITS);
    }
    while out.len() > 1 && *out.last().unwrap() == 0 {
        out.pop();
    }
    out
}

/// Carry resolution: base-2^16 convolution coefficients back into a
/// canonical base-2^32 magnitude.
fn from_coefficients(conv: &[u64], negative: bool) -> BigInt {
    let mut halves: Vec<u32> = Vec::with_capacity(conv.len() + 4);
    let mut carry: u128 = 0;
    for &c in conv {
        carry += c as u128;
        halves.push((carry & COEFF_MASK as u128) as u32);
        carry >>= COEFF_BITS;
    }
    while carry > 0 {
        halves.push((carry & COEFF_MASK as u128) as u32);
        carry >>= COEFF_BITS;
    }
    if halves.len() & 1 == 1 {
        halves.push(0);
    }

    let digits: Vec<u32> = halves
        .chunks_exact(2)
        .map(|pair| pair[0] | (pair[1] << COEFF_BITS))
        .collect();
    BigInt::from_digits_le(digits, negative)
}

// Digit count at or above which Karatsuba hands over to the NTT; below it
// the fixed cost of prime/root discovery dominates.
const NTT_THRESHOLD_DIGITS: usize = 256;
const KARATSUBA_THRESHOLD_DIGITS: usize = 32;

/// Size-dispatching multiply: schoolbook for small operands, Karatsuba in
/// the middle, NTT for large ones.
pub fn fast_mul(a: &BigInt, b: &BigInt) -> Result<BigInt, Error> {
    let min_len: usize = a.digit_len().min(b.digit_len());
    if min_len < KARATSUBA_THRESHOLD_DIGITS {
        Ok(a.mul(b))
    } else if min_len < NTT_THRESHOLD_DIGITS {
        Ok(a.karatsuba_mul(b))
    } else {
        ntt_mul(a, b)
    }
}
