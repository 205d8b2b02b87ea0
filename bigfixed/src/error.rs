#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Arith(#[from] bigint::Error),
    #[error("division by zero")]
    DivisionByZero,
    #[error("root of a negative value")]
    NegativeInput,
    #[error("non-finite floating-point input")]
    NonFinite,
    #[error("zeroth root is undefined")]
    ZeroDegree,
}
