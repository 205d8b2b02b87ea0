//! The BigFixed type: a fixed-point number built from two BigInt
//! magnitudes sharing one sign, with a power-of-two scale in bits.

use crate::Error;
use bigint::BigInt;
use std::cmp::Ordering;

/// Fixed-point number: value = sign * (int_part + frac_part / 2^scale).
/// Both parts are non-negative magnitudes and frac_part < 2^scale always
/// holds; any operation that would violate it carries the excess into the
/// integer part before returning.
#[derive(Clone, Debug)]
pub struct BigFixed {
    int_part: BigInt,
    frac_part: BigInt,
    scale: usize,
    negative: bool,
}

impl BigFixed {
    pub fn zero(scale: usize) -> Self {
        BigFixed {
            int_part: BigInt::zero(),
            frac_part: BigInt::zero(),
            scale,
            negative: false,
        }
    }

    pub fn from_bigint(n: &BigInt, scale: usize) -> Self {
        BigFixed {
            int_part: n.abs(),
            frac_part: BigInt::zero(),
            scale,
            negative: n.is_negative(),
        }
    }

    pub fn from_i64(val: i64, scale: usize) -> Self {
        Self::from_bigint(&BigInt::from_i64(val), scale)
    }

    /// Rebuilds from a signed scaled mantissa (value * 2^scale), splitting
    /// it into integer and fractional parts. The invariant
    /// frac_part < 2^scale holds by construction.
    pub(crate) fn from_scaled(mantissa: BigInt, scale: usize) -> Self {
        let negative: bool = mantissa.is_negative();
        let mag: BigInt = mantissa.abs();
        let int_part: BigInt = mag.shr(scale);
        let frac_part: BigInt = mag.sub(&int_part.shl(scale));
        BigFixed {
            int_part,
            frac_part,
            scale,
            negative: negative && !(mag.is_zero()),
        }
    }

    /// Signed scaled mantissa: value * 2^scale.
    pub(crate) fn to_scaled(&self) -> BigInt {
        let mag: BigInt = self.int_part.shl(self.scale).add(&self.frac_part);
        if self.negative {
            mag.neg()
        } else {
            mag
        }
    }

    #[inline]
    pub fn scale(&self) -> usize {
        self.scale
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.int_part.is_zero() && self.frac_part.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer part magnitude (unsigned).
    pub fn int_part(&self) -> &BigInt {
        &self.int_part
    }

    /// Fractional part magnitude (unsigned, < 2^scale).
    pub fn frac_part(&self) -> &BigInt {
        &self.frac_part
    }

    /// Re-expresses the value at a new scale. Growing the scale is exact;
    /// shrinking truncates low fractional bits toward zero.
    pub fn rescale(&self, new_scale: usize) -> Self {
        if new_scale == self.scale {
            return self.clone();
        }
        let m: BigInt = self.to_scaled();
        let m: BigInt = if new_scale > self.scale {
            m.shl(new_scale - self.scale)
        } else {
            m.shr(self.scale - new_scale)
        };
        Self::from_scaled(m, new_scale)
    }

    /// Brings both operands to max(scale_a, scale_b) before combining.
    fn common_scale(&self, other: &Self) -> (BigInt, BigInt, usize) {
        let scale: usize = self.scale.max(other.scale);
        (
            self.rescale(scale).to_scaled(),
            other.rescale(scale).to_scaled(),
            scale,
        )
    }

    pub fn add(&self, other: &Self) -> Self {
        let (a, b, scale) = self.common_scale(other);
        Self::from_scaled(a.add(&b), scale)
    }

    pub fn sub(&self, other: &Self) -> Self {
        let (a, b, scale) = self.common_scale(other);
        Self::from_scaled(a.sub(&b), scale)
    }

    /// Product via the three-term decomposition
    /// (ai + af/2^s)(bi + bf/2^s) = ai*bi + (ai*bf + af*bi)/2^s
    ///                              + af*bf/2^2s,
    /// assembled at scale 2s and truncated back to s in one shift so no
    /// cross-term precision is lost before the final rounding point.
    pub fn mul(&self, other: &Self) -> Self {
        let scale: usize = self.scale.max(other.scale);
        let a = self.rescale(scale);
        let b = other.rescale(scale);

        let int_int: BigInt = a.int_part.mul(&b.int_part);
        let cross: BigInt = a
            .int_part
            .mul(&b.frac_part)
            .add(&a.frac_part.mul(&b.int_part));
        let frac_frac: BigInt = a.frac_part.mul(&b.frac_part);

        // scaled by 2s: ii << 2s + cross << s + ff, then >> s.
        let mantissa: BigInt = int_int
            .shl(2 * scale)
            .add(&cross.shl(scale))
            .add(&frac_frac)
            .shr(scale);
        let negative: bool = self.negative != other.negative;
        let m = if negative { mantissa.neg() } else { mantissa };
        Self::from_scaled(m, scale)
    }

    /// Quotient: both operands become scaled mantissas at the common
    /// scale, the numerator gets one extra scale-bit pre-shift so the
    /// BigInt division retains full fractional precision.
    pub fn div(&self, other: &Self) -> Result<Self, Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (a, b, scale) = self.common_scale(other);
        let (q, _) = a.shl(scale).div_mod(&b)?;
        Ok(Self::from_scaled(q, scale))
    }

    /// Division by a small positive scalar; used heavily by the series
    /// evaluations in the constants layer.
    pub fn div_u32(&self, d: u32) -> Result<Self, Error> {
        if d == 0 {
            return Err(Error::DivisionByZero);
        }
        let (q, _) = self.to_scaled().div_rem_u32(d)?;
        Ok(Self::from_scaled(q, self.scale))
    }

    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        out.negative = false;
        out
    }

    pub fn neg(&self) -> Self {
        let mut out = self.clone();
        out.negative = !out.negative && !out.is_zero();
        out
    }

    /// Value shift left: multiplies by 2^bits.
    pub fn lshift(&self, bits: usize) -> Self {
        Self::from_scaled(self.to_scaled().shl(bits), self.scale)
    }

    /// Value shift right: divides by 2^bits, truncating toward zero.
    pub fn rshift(&self, bits: usize) -> Self {
        Self::from_scaled(self.to_scaled().shr(bits), self.scale)
    }

    /// Largest integer <= self.
    pub fn floor(&self) -> BigInt {
        if !self.negative {
            self.int_part.clone()
        } else if self.frac_part.is_zero() {
            self.int_part.neg()
        } else {
            self.int_part.add(&BigInt::one()).neg()
        }
    }

    /// Smallest integer >= self.
    pub fn ceil(&self) -> BigInt {
        if self.negative {
            self.int_part.neg()
        } else if self.frac_part.is_zero() {
            self.int_part.clone()
        } else {
            self.int_part.add(&BigInt::one())
        }
    }

    /// Truncation toward zero.
    pub fn trunc(&self) -> BigInt {
        if self.negative {
            self.int_part.neg()
        } else {
            self.int_part.clone()
        }
    }

    /// Nearest integer; the fractional part is compared against
    /// 2^(scale-1) and halves round away from zero.
    pub fn round(&self) -> BigInt {
        if self.scale == 0 {
            return self.trunc();
        }
        let half: BigInt = BigInt::one().shl(self.scale - 1);
        let mag: BigInt = if self.frac_part.cmp_abs(&half) != Ordering::Less {
            self.int_part.add(&BigInt::one())
        } else {
            self.int_part.clone()
        };
        if self.negative {
            mag.neg()
        } else {
            mag
        }
    }

    /// Fractional part only, keeping the sign: self - trunc(self).
    pub fn frac(&self) -> Self {
        BigFixed {
            int_part: BigInt::zero(),
            frac_part: self.frac_part.clone(),
            scale: self.scale,
            negative: self.negative && !self.frac_part.is_zero(),
        }
    }
}

impl PartialEq for BigFixed {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigFixed {}

impl PartialOrd for BigFixed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFixed {
    /// Value comparison across scales: both operands are brought to the
    /// common scale first.
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.common_scale(other);
        a.cmp(&b)
    }
}
