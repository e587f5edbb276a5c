//! Conversion between native token amounts and the 18 decimal values the
//! liquidity math operates on.

use {
    super::{error::Error, fixed_point::Bfp},
    primitive_types::U256,
};

/// Scaling of a single pool token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenScaling {
    pub scaling_factor: Bfp,
}

impl TokenScaling {
    /// Scaling for a token with the given number of decimals. Tokens with
    /// more than 18 decimals are not supported.
    pub fn from_decimals(decimals: u8) -> Result<Self, Error> {
        let exponent = 18u8.checked_sub(decimals).ok_or(Error::InvalidToken)?;
        Ok(Self {
            scaling_factor: Bfp::exp10(exponent.into()),
        })
    }

    /// Scales a native amount up to 18 decimals. Used for balances and
    /// amounts entering the pool, so it rounds down.
    pub fn upscale(&self, amount: U256) -> Result<Bfp, Error> {
        Bfp::from_wei(amount).mul_down(self.scaling_factor)
    }

    /// Scales an amount the caller has to pay back to native units, rounding
    /// up.
    pub fn downscale_up(&self, amount: Bfp) -> Result<U256, Error> {
        Ok(amount.div_up(self.scaling_factor)?.as_uint256())
    }

    /// Scales an amount the caller receives back to native units, rounding
    /// down.
    pub fn downscale_down(&self, amount: Bfp) -> Result<U256, Error> {
        Ok(amount.div_down(self.scaling_factor)?.as_uint256())
    }
}
