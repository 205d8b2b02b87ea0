#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Arith(#[from] bigfixed::Error),
    #[error("basis has no vectors")]
    EmptyBasis,
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("delta {0} outside (0.25, 1.0]")]
    InvalidDelta(f64),
    #[error("basis vectors are linearly dependent")]
    DegenerateBasis,
}
