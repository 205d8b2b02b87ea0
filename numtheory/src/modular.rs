//! Modular arithmetic on BigInt: exponentiation, extended Euclid, modular
//! inverse, Chinese remaindering and Euler's totient.

use crate::Error;
use bigint::BigInt;

/// Returns x mod m in [0, m). Requires m > 0.
pub(crate) fn reduce(x: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    let (_, r) = x.div_mod(m)?;
    if r.is_negative() {
        Ok(r.add(m))
    } else {
        Ok(r)
    }
}

/// Binary (square-and-multiply) exponentiation: base^exp mod m.
/// O(log exp * log^2 m). exp must be non-negative, m positive.
pub fn mod_exp(base: &BigInt, exp: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    if m.is_zero() || m.is_negative() {
        return Err(Error::NonPositiveModulus);
    }
    if exp.is_negative() {
        return Err(Error::NegativeInput);
    }
    let mut result: BigInt = reduce(&BigInt::one(), m)?;
    if exp.is_zero() {
        return Ok(result);
    }
    let mut square: BigInt = reduce(base, m)?;
    let bits: usize = exp.bit_length();
    for i in 0..bits {
        if exp.bit(i) {
            result = reduce(&result.mul(&square), m)?;
        }
        if i + 1 < bits {
            square = reduce(&square.mul(&square), m)?;
        }
    }
    Ok(result)
}

/// Extended Euclidean algorithm: returns (g, x, y) with a*x + b*y = g and
/// g = gcd(a, b) >= 0.
pub fn ext_gcd(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt, BigInt), Error> {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (q, rem) = old_r.div_mod(&r)?;
        old_r = std::mem::replace(&mut r, rem);
        let next_s = old_s.sub(&q.mul(&s));
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = old_t.sub(&q.mul(&t));
        old_t = std::mem::replace(&mut t, next_t);
    }

    // Normalize so the reported gcd is non-negative.
    if old_r.is_negative() {
        old_r = old_r.neg();
        old_s = old_s.neg();
        old_t = old_t.neg();
    }
    Ok((old_r, old_s, old_t))
}

/// Modular inverse of a mod m. `Ok(None)` when gcd(a, m) != 1, i.e. no
/// inverse exists; this is a definite negative answer, not a failure.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<Option<BigInt>, Error> {
    if m.is_zero() || m.is_negative() {
        return Err(Error::NonPositiveModulus);
    }
    let (g, x, _) = ext_gcd(a, m)?;
    if g != BigInt::one() {
        return Ok(None);
    }
    Ok(Some(reduce(&x, m)?))
}

/// Chinese Remainder Theorem: combines x = r_i (mod m_i) into the unique
/// solution modulo the product of the moduli. `Ok(None)` when the moduli
/// are not pairwise coprime.
pub fn crt(remainders: &[BigInt], moduli: &[BigInt]) -> Result<Option<BigInt>, Error> {
    if remainders.len() != moduli.len() || remainders.is_empty() {
        return Err(Error::MismatchedCrtInput);
    }
    for m in moduli {
        if m.is_zero() || m.is_negative() {
            return Err(Error::NonPositiveModulus);
        }
    }

    let mut x: BigInt = reduce(&remainders[0], &moduli[0])?;
    let mut m: BigInt = moduli[0].clone();
    for (r_i, m_i) in remainders.iter().zip(moduli.iter()).skip(1) {
        let inv = match mod_inverse(&m, m_i)? {
            Some(inv) => inv,
            None => return Ok(None),
        };
        // x += m * ((r_i - x) * m^-1 mod m_i)
        let diff: BigInt = reduce(&r_i.sub(&x), m_i)?;
        let step: BigInt = reduce(&diff.mul(&inv), m_i)?;
        x = x.add(&m.mul(&step));
        m = m.mul(m_i);
    }
    Ok(Some(reduce(&x, &m)?))
}

/// Euler's totient by trial-division factorization and the product formula
/// phi(n) = n * prod(1 - 1/p) over the distinct prime factors of n.
pub fn euler_totient(n: &BigInt) -> Result<BigInt, Error> {
    if n.is_zero() || n.is_negative() {
        return Err(Error::NegativeInput);
    }
    let mut phi: BigInt = n.clone();
    let mut rest: BigInt = n.clone();

    let mut apply_factor = |phi: &mut BigInt, p: u64| -> Result<(), Error> {
        let p_big = BigInt::from_u64(p);
        let (q, _) = phi.div_mod(&p_big)?;
        *phi = q.mul(&p_big.sub(&BigInt::one()));
        Ok(())
    };

    let mut divide_out = |rest: &mut BigInt, p: u64| -> Result<bool, Error> {
        let p_big = BigInt::from_u64(p);
        let mut divided = false;
        loop {
            let (q, r) = rest.div_mod(&p_big)?;
            if !r.is_zero() {
                break;
            }
            *rest = q;
            divided = true;
        }
        Ok(divided)
    };

    if divide_out(&mut rest, 2)? {
        apply_factor(&mut phi, 2)?;
    }
    let mut d: u64 = 3;
    loop {
        let d_big = BigInt::from_u64(d);
        if d_big.mul(&d_big) > rest {
            break;
        }
        if divide_out(&mut rest, d)? {
            apply_factor(&mut phi, d)?;
        }
        d += 2;
    }
    // Leftover factor larger than sqrt(n) is prime.
    if rest > BigInt::one() {
        let (q, _) = phi.div_mod(&rest)?;
        phi = q.mul(&rest.sub(&BigInt::one()));
    }
    Ok(phi)
}
