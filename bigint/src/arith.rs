//! Magnitude (unsigned digit-array) arithmetic. Digits are base-2^32,
//! least-significant first. Every function returns or leaves its output
//! in canonical form: no trailing zero digit except a single zero digit.

use itertools::{EitherOrBoth, Itertools};
use std::cmp::Ordering;

/// Trims trailing (most-significant) zero digits, keeping at least one.
pub(crate) fn normalize(v: &mut Vec<u32>) {
    while v.len() > 1 && *v.last().unwrap() == 0 {
        v.pop();
    }
}

pub(crate) fn is_zero(v: &[u32]) -> bool {
    v.len() == 1 && v[0] == 0
}

/// Compares two canonical magnitudes, length first then digits from the top.
pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }
    Ordering::Equal
}

/// Returns a + b with carry propagation through a 64-bit accumulator.
pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry: u64 = 0;
    for pair in a.iter().zip_longest(b.iter()) {
        let (x, y) = match pair {
            EitherOrBoth::Both(x, y) => (*x as u64, *y as u64),
            EitherOrBoth::Left(x) => (*x as u64, 0),
            EitherOrBoth::Right(y) => (0, *y as u64),
        };
        let t: u64 = x + y + carry;
        out.push(t as u32);
        carry = t >> 32;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    out
}

/// Returns a - b. Requires a >= b.
pub(crate) fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut out: Vec<u32> = Vec::with_capacity(a.len());
    let mut borrow: i64 = 0;
    for pair in a.iter().zip_longest(b.iter()) {
        let (x, y) = match pair {
            EitherOrBoth::Both(x, y) => (*x as i64, *y as i64),
            EitherOrBoth::Left(x) => (*x as i64, 0),
            EitherOrBoth::Right(_) => unreachable!("a >= b implies a.len() >= b.len()"),
        };
        let mut t: i64 = x - y - borrow;
        if t < 0 {
            t += 1 << 32;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(t as u32);
    }
    debug_assert!(borrow == 0);
    normalize(&mut out);
    out
}

/// Assigns a - b to a. Requires a >= b.
pub(crate) fn sub_assign(a: &mut Vec<u32>, b: &[u32]) {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let mut borrow: i64 = 0;
    for i in 0..a.len() {
        let y: i64 = if i < b.len() { b[i] as i64 } else { 0 };
        let mut t: i64 = a[i] as i64 - y - borrow;
        if t < 0 {
            t += 1 << 32;
            borrow = 1;
        } else {
            borrow = 0;
        }
        a[i] = t as u32;
    }
    debug_assert!(borrow == 0);
    normalize(a);
}

/// Schoolbook O(n^2) product: digit-by-digit accumulation into a buffer
/// of len(a) + len(b) digits.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }
    let mut out: Vec<u32> = vec![0; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &bj) in b.iter().enumerate() {
            let t: u64 = ai as u64 * bj as u64 + out[i + j] as u64 + carry;
            out[i + j] = t as u32;
            carry = t >> 32;
        }
        out[i + b.len()] = carry as u32;
    }
    normalize(&mut out);
    out
}

/// Returns v << bits, splitting the shift at the digit boundary.
pub(crate) fn shl(v: &[u32], bits: usize) -> Vec<u32> {
    if is_zero(v) || bits == 0 {
        return v.to_vec();
    }
    let digit_shift: usize = bits / 32;
    let bit_shift: u32 = (bits % 32) as u32;
    let mut out: Vec<u32> = vec![0; digit_shift];
    if bit_shift == 0 {
        out.extend_from_slice(v);
    } else {
        let mut carry: u32 = 0;
        for &d in v {
            out.push((d << bit_shift) | carry);
            carry = d >> (32 - bit_shift);
        }
        if carry != 0 {
            out.push(carry);
        }
    }
    normalize(&mut out);
    out
}

/// Returns v >> bits (truncating).
pub(crate) fn shr(v: &[u32], bits: usize) -> Vec<u32> {
    let digit_shift: usize = bits / 32;
    if digit_shift >= v.len() {
        return vec![0];
    }
    let bit_shift: u32 = (bits % 32) as u32;
    let mut out: Vec<u32> = v[digit_shift..].to_vec();
    if bit_shift != 0 {
        for i in 0..out.len() {
            out[i] >>= bit_shift;
            if i + 1 < out.len() {
                out[i] |= out[i + 1] << (32 - bit_shift);
            }
        }
    }
    normalize(&mut out);
    out
}

/// Number of significant bits; zero has bit length 0.
pub(crate) fn bit_length(v: &[u32]) -> usize {
    if is_zero(v) {
        return 0;
    }
    (v.len() - 1) * 32 + (32 - v.last().unwrap().leading_zeros() as usize)
}

pub(crate) fn bit(v: &[u32], i: usize) -> bool {
    let digit: usize = i / 32;
    digit < v.len() && (v[digit] >> (i % 32)) & 1 == 1
}

pub(crate) fn trailing_zeros(v: &[u32]) -> usize {
    debug_assert!(!is_zero(v));
    let mut tz: usize = 0;
    for &d in v {
        if d == 0 {
            tz += 32;
        } else {
            return tz + d.trailing_zeros() as usize;
        }
    }
    tz
}

/// Shifts v left by one bit in place and sets bit 0 to low.
pub(crate) fn shl1_set(v: &mut Vec<u32>, low: bool) {
    let mut carry: u32 = low as u32;
    for d in v.iter_mut() {
        let next: u32 = *d >> 31;
        *d = (*d << 1) | carry;
        carry = next;
    }
    if carry != 0 {
        v.push(carry);
    }
}

/// Bit-serial long division of two canonical magnitudes.
/// Walks the dividend bits from most to least significant, shifting the
/// remainder left and subtracting the divisor whenever remainder >= divisor.
/// Requires b != 0. Returns (quotient, remainder).
pub(crate) fn div_mod(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!is_zero(b));
    if cmp(a, b) == Ordering::Less {
        return (vec![0], a.to_vec());
    }
    let n: usize = bit_length(a);
    let mut rem: Vec<u32> = vec![0];
    let mut quot: Vec<u32> = vec![0; a.len()];
    for i in (0..n).rev() {
        shl1_set(&mut rem, bit(a, i));
        if cmp(&rem, b) != Ordering::Less {
            sub_assign(&mut rem, b);
            quot[i / 32] |= 1 << (i % 32);
        }
    }
    normalize(&mut quot);
    (quot, rem)
}

/// Single-digit division fast path used by the decimal converter.
/// Requires d != 0. Returns (quotient, remainder).
pub(crate) fn div_rem_u32(v: &[u32], d: u32) -> (Vec<u32>, u32) {
    debug_assert!(d != 0);
    let mut out: Vec<u32> = vec![0; v.len()];
    let mut rem: u64 = 0;
    for i in (0..v.len()).rev() {
        let cur: u64 = (rem << 32) | v[i] as u64;
        out[i] = (cur / d as u64) as u32;
        rem = cur % d as u64;
    }
    normalize(&mut out);
    (out, rem as u32)
}

/// Assigns v * m + a to v. Used by the decimal parser.
pub(crate) fn mul_u32_add(v: &mut Vec<u32>, m: u32, a: u32) {
    let mut carry: u64 = a as u64;
    for d in v.iter_mut() {
        let t: u64 = *d as u64 * m as u64 + carry;
        *d = t as u32;
        carry = t >> 32;
    }
    while carry != 0 {
        v.push(carry as u32);
        carry >>= 32;
    }
    normalize(v);
}
