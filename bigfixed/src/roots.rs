//! Integer and fixed-point roots via Newton iteration.

use crate::{BigFixed, Error};
use bigint::BigInt;

/// Floor of the square root of a non-negative integer, by Newton
/// iteration on x -> (x + a/x) / 2. The iterates decrease monotonically
/// from the initial overestimate, so the loop stops at the first
/// non-decreasing step.
pub fn isqrt(a: &BigInt) -> Result<BigInt, Error> {
    if a.is_negative() {
        return Err(Error::NegativeInput);
    }
    if a.is_zero() {
        return Ok(BigInt::zero());
    }
    // 2^ceil(bits/2) >= sqrt(a)
    let mut x: BigInt = BigInt::one().shl(a.bit_length().div_ceil(2));
    loop {
        let (q, _) = a.div_mod(&x)?;
        let next: BigInt = x.add(&q).shr(1);
        if next.cmp_abs(&x) != std::cmp::Ordering::Less {
            return Ok(x);
        }
        x = next;
    }
}

/// Floor of the n-th root of a non-negative integer:
/// x -> ((n-1)x + a/x^(n-1)) / n.
pub fn iroot(a: &BigInt, n: u32) -> Result<BigInt, Error> {
    if n == 0 {
        return Err(Error::ZeroDegree);
    }
    if a.is_negative() {
        return Err(Error::NegativeInput);
    }
    if n == 1 || a.is_zero() {
        return Ok(a.clone());
    }
    if n == 2 {
        return isqrt(a);
    }
    let mut x: BigInt = BigInt::one().shl(a.bit_length().div_ceil(n as usize));
    let n_minus_1 = BigInt::from_u64(u64::from(n - 1));
    loop {
        let mut pow: BigInt = x.clone();
        for _ in 0..n - 2 {
            pow = pow.mul(&x);
        }
        let (q, _) = a.div_mod(&pow)?;
        let (next, _) = x.mul(&n_minus_1).add(&q).div_rem_u32(n)?;
        if next.cmp_abs(&x) != std::cmp::Ordering::Less {
            return Ok(x);
        }
        x = next;
    }
}

impl BigFixed {
    /// Square root at the operand's scale, truncated toward zero:
    /// sqrt(m / 2^s) = isqrt(m << s) / 2^s.
    pub fn sqrt(&self) -> Result<Self, Error> {
        let m: BigInt = self.to_scaled();
        if m.is_negative() {
            return Err(Error::NegativeInput);
        }
        let r: BigInt = isqrt(&m.shl(self.scale()))?;
        Ok(Self::from_scaled(r, self.scale()))
    }

    /// n-th root at the operand's scale, truncated toward zero. The
    /// mantissa is pre-shifted by scale * (n - 1) bits so the integer
    /// root lands back at the right scale.
    pub fn nth_root(&self, n: u32) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::ZeroDegree);
        }
        let m: BigInt = self.to_scaled();
        if m.is_negative() {
            return Err(Error::NegativeInput);
        }
        let r: BigInt = iroot(&m.shl(self.scale() * (n as usize - 1)), n)?;
        Ok(Self::from_scaled(r, self.scale()))
    }
}
