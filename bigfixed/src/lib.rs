//! Arbitrary-precision binary fixed-point arithmetic on top of the
//! bigint crate, plus integer/fixed-point roots and cached evaluation
//! of common constants.

mod constants;
mod convert;
mod error;
mod fixed;
mod roots;

pub use constants::{Constant, ConstantCache};
pub use error::Error;
pub use fixed::BigFixed;
pub use roots::{iroot, isqrt};
