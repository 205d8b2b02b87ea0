#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid decimal literal {0:?}")]
    InvalidDecimal(String),
}
