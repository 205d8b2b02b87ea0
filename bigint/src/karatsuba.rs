//! Karatsuba multiplication: three recursive sub-products instead of four.

use crate::{arith, BigInt};

// Below this digit count the schoolbook loop wins; the crossover was
// measured on the original digit engine at around 32 base-2^32 digits.
const KARATSUBA_THRESHOLD: usize = 32;

impl BigInt {
    /// Returns self * other via recursive Karatsuba, falling back to the
    /// schoolbook product below the digit threshold.
    pub fn karatsuba_mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::from_digits(
            kara(self.magnitude(), other.magnitude()),
            self.is_negative() != other.is_negative(),
        )
    }
}

/// Splits a magnitude at digit m into (low, high), both canonical.
fn split_at(v: &[u32], m: usize) -> (Vec<u32>, Vec<u32>) {
    if v.len() <= m {
        return (canonical(v), vec![0]);
    }
    (canonical(&v[..m]), canonical(&v[m..]))
}

fn canonical(v: &[u32]) -> Vec<u32> {
    let mut out = v.to_vec();
    if out.is_empty() {
        out.push(0);
    }
    arith::normalize(&mut out);
    out
}

fn kara(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.len() <= KARATSUBA_THRESHOLD || b.len() <= KARATSUBA_THRESHOLD {
        return arith::mul(a, b);
    }

    // a = a1*B + a0, b = b1*B + b0 with B = 2^(32m).
    let m: usize = a.len().max(b.len()) / 2;
    let (a0, a1) = split_at(a, m);
    let (b0, b1) = split_at(b, m);

    let z0: Vec<u32> = kara(&a0, &b0);
    let z2: Vec<u32> = kara(&a1, &b1);

    // z1 = (a1+a0)(b1+b0) - z2 - z0; never negative.
    let sa: Vec<u32> = arith::add(&a1, &a0);
    let sb: Vec<u32> = arith::add(&b1, &b0);
    let cross: Vec<u32> = kara(&sa, &sb);
    let z1: Vec<u32> = arith::sub(&arith::sub(&cross, &z2), &z0);

    // result = z2*B^2 + z1*B + z0
    let mut out: Vec<u32> = arith::shl(&z2, 64 * m);
    out = arith::add(&out, &arith::shl(&z1, 32 * m));
    arith::add(&out, &z0)
}
