//! Well-known constants evaluated to an arbitrary bit scale, with a
//! process-wide cache keyed by (constant, scale).
//!
//! pi uses Machin's formula, the logarithms use atanh identities with
//! small rational arguments, e sums the reciprocal factorials and phi
//! comes straight from sqrt(5). Every series runs with guard bits and
//! truncates back to the requested scale at the end.

use crate::{BigFixed, Error};
use fnv::FnvHashMap;
use std::sync::Mutex;

/// Extra low bits carried through the series so accumulated truncation
/// never reaches the requested scale.
const GUARD_BITS: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    Phi,
    Ln2,
    Ln3,
    Ln10,
}

/// Memoizing store for constant evaluations. Cheap to share behind a
/// reference; all access goes through the internal mutex.
pub struct ConstantCache {
    entries: Mutex<FnvHashMap<(Constant, usize), BigFixed>>,
}

impl Default for ConstantCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantCache {
    pub fn new() -> Self {
        ConstantCache {
            entries: Mutex::new(FnvHashMap::default()),
        }
    }

    /// Returns the constant at the given scale, computing and caching it
    /// on first request.
    pub fn get(&self, which: Constant, scale: usize) -> Result<BigFixed, Error> {
        if let Some(hit) = self.entries.lock().unwrap().get(&(which, scale)) {
            return Ok(hit.clone());
        }
        let value: BigFixed = compute(which, scale)?;
        self.entries
            .lock()
            .unwrap()
            .insert((which, scale), value.clone());
        Ok(value)
    }
}

fn compute(which: Constant, scale: usize) -> Result<BigFixed, Error> {
    let work: usize = scale + GUARD_BITS;
    let value: BigFixed = match which {
        // Machin: pi = 16 atan(1/5) - 4 atan(1/239).
        Constant::Pi => atan_inv(5, work)?
            .lshift(4)
            .sub(&atan_inv(239, work)?.lshift(2)),
        Constant::E => e_series(work)?,
        // phi = (1 + sqrt(5)) / 2.
        Constant::Phi => BigFixed::from_i64(5, work)
            .sqrt()?
            .add(&BigFixed::from_i64(1, work))
            .rshift(1),
        Constant::Ln2 => ln2(work)?,
        // ln 3 = ln 2 + ln(3/2), and ln(3/2) = 2 atanh(1/5).
        Constant::Ln3 => ln2(work)?.add(&atanh_inv(5, work)?.lshift(1)),
        // ln 10 = 3 ln 2 + ln(10/8), and ln(10/8) = 2 atanh(1/9).
        Constant::Ln10 => {
            let l2: BigFixed = ln2(work)?;
            l2.lshift(1).add(&l2).add(&atanh_inv(9, work)?.lshift(1))
        }
    };
    Ok(value.rescale(scale))
}

fn ln2(scale: usize) -> Result<BigFixed, Error> {
    // ln 2 = 2 atanh(1/3).
    Ok(atanh_inv(3, scale)?.lshift(1))
}

/// atan(1/x) = sum_k (-1)^k / ((2k+1) x^(2k+1)), for x >= 2.
fn atan_inv(x: u32, scale: usize) -> Result<BigFixed, Error> {
    let x_sq: u32 = x * x;
    let mut power: BigFixed = BigFixed::from_i64(1, scale).div_u32(x)?;
    let mut sum: BigFixed = BigFixed::zero(scale);
    let mut k: u32 = 0;
    let mut subtract: bool = false;
    while !power.is_zero() {
        let term: BigFixed = power.div_u32(2 * k + 1)?;
        sum = if subtract { sum.sub(&term) } else { sum.add(&term) };
        power = power.div_u32(x_sq)?;
        subtract = !subtract;
        k += 1;
    }
    Ok(sum)
}

/// atanh(1/x) = sum_k 1 / ((2k+1) x^(2k+1)), for x >= 2.
fn atanh_inv(x: u32, scale: usize) -> Result<BigFixed, Error> {
    let x_sq: u32 = x * x;
    let mut power: BigFixed = BigFixed::from_i64(1, scale).div_u32(x)?;
    let mut sum: BigFixed = BigFixed::zero(scale);
    let mut k: u32 = 0;
    while !power.is_zero() {
        sum = sum.add(&power.div_u32(2 * k + 1)?);
        power = power.div_u32(x_sq)?;
        k += 1;
    }
    Ok(sum)
}

/// e = sum_k 1/k!.
fn e_series(scale: usize) -> Result<BigFixed, Error> {
    let mut term: BigFixed = BigFixed::from_i64(1, scale);
    let mut sum: BigFixed = term.clone();
    let mut k: u32 = 1;
    while !term.is_zero() {
        term = term.div_u32(k)?;
        sum = sum.add(&term);
        k += 1;
    }
    Ok(sum)
}
