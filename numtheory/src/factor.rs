//! Pollard's rho factorization with Floyd cycle detection.

use crate::modular::reduce;
use crate::primality::random_below;
use crate::Error;
use bigint::BigInt;
use sampling::Source;

/// Searches for a nontrivial factor of n using the iteration
/// x -> x^2 + c (mod n) with Floyd's two-pointer cycle detection,
/// taking gcd(|x - y|, n) each round. `Ok(None)` means the bounded search
/// was inconclusive, not that n is prime.
pub fn pollard_rho(
    n: &BigInt,
    max_rounds: usize,
    source: &mut Source,
) -> Result<Option<BigInt>, Error> {
    if *n < BigInt::from_u64(2) {
        return Err(Error::InputTooSmall);
    }
    if n.is_even() {
        return Ok(Some(BigInt::from_u64(2)));
    }

    let one = BigInt::one();
    let step = |x: &BigInt, c: &BigInt| -> Result<BigInt, Error> {
        reduce(&x.mul(x).add(c), n)
    };

    let mut c: BigInt = random_below(&n.sub(&one), source)?.add(&one);
    let mut x: BigInt = BigInt::from_u64(2);
    let mut y: BigInt = x.clone();

    for _ in 0..max_rounds {
        x = step(&x, &c)?;
        y = step(&step(&y, &c)?, &c)?;
        let d: BigInt = x.sub(&y).abs().binary_gcd(n);
        if d == *n {
            // Degenerate cycle; restart with a fresh constant.
            c = random_below(&n.sub(&one), source)?.add(&one);
            x = BigInt::from_u64(2);
            y = x.clone();
            continue;
        }
        if d != one {
            return Ok(Some(d));
        }
    }
    Ok(None)
}
