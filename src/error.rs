//! Error types for monetary construction and arithmetic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A string operand could not be parsed as a decimal number.
    #[error("invalid decimal amount {0:?}")]
    InvalidAmount(String),
    /// A two-money operation was given operands in different currencies.
    #[error("currency mismatch: {left} != {right}")]
    CurrencyMismatch { left: String, right: String },
    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// The result does not fit in the underlying decimal representation.
    #[error("decimal overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
