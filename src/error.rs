use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum PositionError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer {0} does not fit in a coordinate")]
    OutOfRange(i64),
}

pub type PositionResult<T> = Result<T, PositionError>;
