//! Decimal string conversion. The serialized form is an optional leading
//! `-` followed by ASCII digits with no leading zeros; canonical zero
//! renders as "0".

use crate::{arith, BigInt, Error};
use std::fmt;
use std::str::FromStr;

// Nine decimal digits per division step keeps the repeated-division loop
// inside the u32 fast path.
const CHUNK_POW10: u32 = 1_000_000_000;
const CHUNK_DIGITS: usize = 9;

impl BigInt {
    pub fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut groups: Vec<u32> = Vec::new();
        let mut mag: Vec<u32> = self.magnitude().to_vec();
        while !arith::is_zero(&mag) {
            let (q, r) = arith::div_rem_u32(&mag, CHUNK_POW10);
            groups.push(r);
            mag = q;
        }
        let mut out = String::with_capacity(groups.len() * CHUNK_DIGITS + 1);
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&groups.last().unwrap().to_string());
        for g in groups.iter().rev().skip(1) {
            out.push_str(&format!("{:09}", g));
        }
        out
    }

    pub fn from_decimal_str(s: &str) -> Result<Self, Error> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidDecimal(s.to_string()));
        }
        let mut mag: Vec<u32> = vec![0];
        let mut rest = body;
        while !rest.is_empty() {
            let take = if rest.len() % CHUNK_DIGITS == 0 {
                CHUNK_DIGITS
            } else {
                rest.len() % CHUNK_DIGITS
            };
            let (head, tail) = rest.split_at(take);
            // unwrap is fine: head is 1..=9 ASCII digits
            let chunk: u32 = head.parse().unwrap();
            arith::mul_u32_add(&mut mag, 10u32.pow(take as u32), chunk);
            rest = tail;
        }
        Ok(Self::from_digits(mag, negative))
    }

    /// Checked conversion back to u64; None if negative or too wide.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() || self.digit_len() > 2 {
            return None;
        }
        let mag = self.magnitude();
        let mut val: u64 = mag[0] as u64;
        if mag.len() == 2 {
            val |= (mag[1] as u64) << 32;
        }
        Some(val)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_decimal_str(s)
    }
}
