//! Errors raised by the liquidity math. Variant names follow the Balancer
//! error codes so failures can be matched against on-chain reverts.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("ADD_OVERFLOW")]
    AddOverflow,
    #[error("SUB_OVERFLOW")]
    SubOverflow,
    #[error("MUL_OVERFLOW")]
    MulOverflow,
    #[error("ZERO_DIVISION")]
    ZeroDivision,
    #[error("DIV_INTERNAL")]
    DivInternal,
    #[error("INVALID_TOKEN")]
    InvalidToken,
    #[error("expected {expected} token amounts but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("INVARIANT_RATIO_ABOVE_MAX")]
    InvariantRatioAboveMax,
    #[error("INVARIANT_RATIO_BELOW_MIN")]
    InvariantRatioBelowMin,
}

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A product, sum or scaled dividend does not fit into 256 bits.
    ArithmeticOverflow,
    /// The divisor (supply, invariant or fee complement) was zero.
    DivisionByZero,
    /// A subtraction would have gone negative.
    Underflow,
    /// The inputs themselves are malformed or outside the pool's bounds.
    InvalidInput,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AddOverflow | Self::MulOverflow | Self::DivInternal => {
                ErrorKind::ArithmeticOverflow
            }
            Self::ZeroDivision => ErrorKind::DivisionByZero,
            Self::SubOverflow => ErrorKind::Underflow,
            Self::InvalidToken
            | Self::LengthMismatch { .. }
            | Self::InvariantRatioAboveMax
            | Self::InvariantRatioBelowMin => ErrorKind::InvalidInput,
        }
    }
}
