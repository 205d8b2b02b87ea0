#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Arith(#[from] bigint::Error),
    #[error("modulus must be positive")]
    NonPositiveModulus,
    #[error("negative input not allowed here")]
    NegativeInput,
    #[error("input must be greater than one")]
    InputTooSmall,
    #[error("transform size {0} is not a power of two")]
    NonPowerOfTwoSize(usize),
    #[error("no NTT-friendly prime found for transform size {0}")]
    NoNttPrime(usize),
    #[error("no primitive root found modulo {0}")]
    NoPrimitiveRoot(u64),
    #[error("input length {got} does not match transform size {expected}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("remainder and modulus lists differ in length")]
    MismatchedCrtInput,
}
