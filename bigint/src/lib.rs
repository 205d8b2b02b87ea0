//! Sign-magnitude arbitrary-precision integers over base-2^32 digit arrays,
//! plus the fast-multiplication primitives built directly on them
//! (Karatsuba, binary GCD).

mod arith;
mod convert;
mod error;
mod gcd;
mod karatsuba;

pub use error::Error;

use std::cmp::Ordering;

/// Arbitrary-precision integer. Digits are base-2^32, least-significant
/// first. Canonical form: no trailing zero digit except the single-digit
/// zero, which is never negative. Every constructor and operation returns
/// values already in canonical form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    digits: Vec<u32>,
    negative: bool,
}

impl BigInt {
    pub fn zero() -> Self {
        BigInt {
            digits: vec![0],
            negative: false,
        }
    }

    pub fn one() -> Self {
        BigInt {
            digits: vec![1],
            negative: false,
        }
    }

    pub fn from_u64(val: u64) -> Self {
        let mut digits: Vec<u32> = vec![val as u32, (val >> 32) as u32];
        arith::normalize(&mut digits);
        BigInt {
            digits,
            negative: false,
        }
    }

    pub fn from_i64(val: i64) -> Self {
        let mut n = Self::from_u64(val.unsigned_abs());
        n.negative = val < 0 && !n.is_zero();
        n
    }

    /// Builds a value from canonical little-endian digits and a sign.
    /// The sign is ignored for zero.
    pub(crate) fn from_digits(mut digits: Vec<u32>, negative: bool) -> Self {
        arith::normalize(&mut digits);
        let negative = negative && !arith::is_zero(&digits);
        BigInt { digits, negative }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        arith::is_zero(&self.digits)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.digits[0] & 1 == 0
    }

    /// Number of digits in use.
    #[inline]
    pub fn digit_len(&self) -> usize {
        self.digits.len()
    }

    /// Number of significant bits of the magnitude; zero has bit length 0.
    pub fn bit_length(&self) -> usize {
        arith::bit_length(&self.digits)
    }

    /// Returns bit i of the magnitude.
    pub fn bit(&self, i: usize) -> bool {
        arith::bit(&self.digits, i)
    }

    pub(crate) fn magnitude(&self) -> &[u32] {
        &self.digits
    }

    /// Magnitude digits, least-significant first.
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    /// Builds a value from little-endian base-2^32 digits, normalizing to
    /// canonical form. The sign is ignored for zero.
    pub fn from_digits_le(digits: Vec<u32>, negative: bool) -> Self {
        Self::from_digits(digits, negative)
    }

    pub fn abs(&self) -> Self {
        BigInt {
            digits: self.digits.clone(),
            negative: false,
        }
    }

    pub fn neg(&self) -> Self {
        BigInt {
            digits: self.digits.clone(),
            negative: !self.negative && !self.is_zero(),
        }
    }

    /// Returns self + other. Same-sign operands add magnitudes; mixed signs
    /// subtract the smaller magnitude from the larger and take the larger
    /// operand's sign. Equal magnitudes of opposite sign give canonical zero.
    pub fn add(&self, other: &Self) -> Self {
        if self.negative == other.negative {
            return Self::from_digits(arith::add(&self.digits, &other.digits), self.negative);
        }
        match arith::cmp(&self.digits, &other.digits) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_digits(arith::sub(&self.digits, &other.digits), self.negative)
            }
            Ordering::Less => {
                Self::from_digits(arith::sub(&other.digits, &self.digits), other.negative)
            }
        }
    }

    /// Returns self - other.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Schoolbook product; result sign is the XOR of the operand signs.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        Self::from_digits(
            arith::mul(&self.digits, &other.digits),
            self.negative != other.negative,
        )
    }

    /// Truncated division: returns (q, r) with self = other*q + r and
    /// |r| < |other|. The remainder takes the dividend's sign.
    pub fn div_mod(&self, other: &Self) -> Result<(Self, Self), Error> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = arith::div_mod(&self.digits, &other.digits);
        Ok((
            Self::from_digits(q, self.negative != other.negative),
            Self::from_digits(r, self.negative),
        ))
    }

    /// Single-digit division fast path. Operates on the magnitude.
    pub fn div_rem_u32(&self, d: u32) -> Result<(Self, u32), Error> {
        if d == 0 {
            return Err(Error::DivisionByZero);
        }
        let (q, r) = arith::div_rem_u32(&self.digits, d);
        Ok((Self::from_digits(q, self.negative), r))
    }

    /// Magnitude shift left by `bits` (value * 2^bits for non-negatives).
    pub fn shl(&self, bits: usize) -> Self {
        Self::from_digits(arith::shl(&self.digits, bits), self.negative)
    }

    /// Magnitude shift right by `bits`, truncating toward zero.
    pub fn shr(&self, bits: usize) -> Self {
        Self::from_digits(arith::shr(&self.digits, bits), self.negative)
    }

    /// Compares magnitudes only, ignoring sign.
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        arith::cmp(&self.digits, &other.digits)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Sign first, then magnitude (reversed for two negatives).
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => arith::cmp(&self.digits, &other.digits),
            (true, true) => arith::cmp(&other.digits, &self.digits),
        }
    }
}

impl std::ops::Add for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(self, rhs)
    }
}

impl std::ops::Sub for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(self, rhs)
    }
}

impl std::ops::Mul for &BigInt {
    type Output = BigInt;
    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}
