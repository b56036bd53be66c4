use thiserror::Error;

/// Domain-precondition violations.
///
/// A single error kind covers every rejected input: division or modulo by
/// zero, square root of a negative number, factorial of a negative number,
/// and factorial results exceeding the `u128` range. The message names the
/// violated precondition.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CalcResult<T> = Result<T, CalcError>;
