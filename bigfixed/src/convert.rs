//! Boundary conversions for BigFixed: decimal rendering and f64
//! round-tripping. Nothing in the arithmetic core calls into here.

use crate::{BigFixed, Error};
use bigint::BigInt;

impl BigFixed {
    /// Renders the value with the requested number of decimal places,
    /// truncating (not rounding) the last place.
    pub fn to_decimal_string(&self, places: usize) -> String {
        let mut out = String::new();
        if self.negative_for_display() {
            out.push('-');
        }
        out.push_str(&self.int_part().to_decimal_string());
        if places == 0 {
            return out;
        }
        out.push('.');
        // Pull decimal digits off the fractional part one at a time:
        // multiply by ten, the integer part of the product is the digit.
        let mut f: BigInt = self.frac_part().clone();
        let ten = BigInt::from_u64(10);
        for _ in 0..places {
            f = f.mul(&ten);
            let digit: BigInt = f.shr(self.scale());
            out.push_str(&digit.to_decimal_string());
            f = f.sub(&digit.shl(self.scale()));
        }
        out
    }

    fn negative_for_display(&self) -> bool {
        self.is_negative() && !self.is_zero()
    }

    /// Closest-representable f64. Diagnostic only; loses precision beyond
    /// 53 mantissa bits.
    pub fn to_f64(&self) -> f64 {
        let m: BigInt = self.to_scaled();
        let mag: BigInt = m.abs();
        let bits: usize = mag.bit_length();
        if bits == 0 {
            return 0.0;
        }
        let take: usize = bits.min(53);
        // unwrap is fine: at most 53 bits survive the shift
        let top: f64 = mag.shr(bits - take).to_u64().unwrap() as f64;
        let exp: i32 = (bits - take) as i32 - self.scale() as i32;
        let val: f64 = top * 2f64.powi(exp);
        if m.is_negative() {
            -val
        } else {
            val
        }
    }

    /// Exact conversion from a finite f64 at the given scale; fractional
    /// bits beyond the scale are truncated.
    pub fn from_f64(value: f64, scale: usize) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::NonFinite);
        }
        if value == 0.0 {
            return Ok(Self::zero(scale));
        }
        let bits: u64 = value.abs().to_bits();
        let raw_exp: i64 = ((bits >> 52) & 0x7FF) as i64;
        let frac: u64 = bits & ((1u64 << 52) - 1);
        // value.abs() = mant * 2^exp
        let (mant, exp): (u64, i64) = if raw_exp == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), raw_exp - 1075)
        };
        let shift: i64 = exp + scale as i64;
        let mag: BigInt = if shift >= 0 {
            BigInt::from_u64(mant).shl(shift as usize)
        } else {
            BigInt::from_u64(mant).shr((-shift) as usize)
        };
        let m: BigInt = if value < 0.0 { mag.neg() } else { mag };
        Ok(Self::from_scaled(m, scale))
    }
}

impl std::fmt::Display for BigFixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Ten decimal places by default; callers wanting control use
        // to_decimal_string directly.
        f.write_str(&self.to_decimal_string(10))
    }
}
