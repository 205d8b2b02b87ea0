//! Number-theoretic layer over the BigInt engine: modular arithmetic,
//! primality testing, factorization, Chinese remaindering, Euler's totient
//! and the Number Theoretic Transform.

mod error;
mod factor;
mod modular;
mod primality;
pub mod ntt;

pub use error::Error;
pub use factor::pollard_rho;
pub use modular::{crt, euler_totient, ext_gcd, mod_exp, mod_inverse};
pub use ntt::{fast_mul, ntt_mul, NttContext};
pub use primality::{is_prime_u64, miller_rabin, random_below};
