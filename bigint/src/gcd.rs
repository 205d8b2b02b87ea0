//! Binary (Stein) GCD: shifts and subtractions only, no division.

use crate::{arith, BigInt};
use std::cmp::Ordering;

impl BigInt {
    /// Returns gcd(|self|, |other|). gcd(0, b) = |b|.
    pub fn binary_gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.abs();
        }
        if other.is_zero() {
            return self.abs();
        }

        let mut a: Vec<u32> = self.magnitude().to_vec();
        let mut b: Vec<u32> = other.magnitude().to_vec();

        // Shared factors of two are removed up front and restored at the end.
        let tz_a: usize = arith::trailing_zeros(&a);
        let tz_b: usize = arith::trailing_zeros(&b);
        let shared: usize = tz_a.min(tz_b);
        a = arith::shr(&a, tz_a);
        b = arith::shr(&b, shared);

        // a stays odd; b sheds its factors of two each round, then the
        // larger operand absorbs the difference.
        loop {
            let tz: usize = arith::trailing_zeros(&b);
            if tz > 0 {
                b = arith::shr(&b, tz);
            }
            match arith::cmp(&a, &b) {
                Ordering::Equal => break,
                Ordering::Greater => std::mem::swap(&mut a, &mut b),
                Ordering::Less => {}
            }
            arith::sub_assign(&mut b, &a);
            if arith::is_zero(&b) {
                break;
            }
        }

        BigInt::from_digits(arith::shl(&a, shared), false)
    }
}
