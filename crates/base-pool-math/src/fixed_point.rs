//! Module emulating the functions of the Balancer `FixedPoint` library that
//! the liquidity math depends on. All operations are checked and report the
//! same error codes as the contracts.

use {
    super::{error::Error, math::BalU256},
    anyhow::{Context, Result, bail},
    primitive_types::U256,
    std::{
        fmt::{self, Debug, Display, Formatter},
        str::FromStr,
        sync::LazyLock,
    },
};

static ONE_18: LazyLock<U256> = LazyLock::new(|| U256::exp10(18));
static ZERO: LazyLock<Bfp> = LazyLock::new(|| Bfp(U256::zero()));
static ONE: LazyLock<Bfp> = LazyLock::new(|| Bfp(*ONE_18));

/// Fixed point number with exactly 18 decimals backed by a `U256`. It
/// corresponds to Solidity's `ufixed256x18` and is named after the Balancer
/// fixed point library whose rounding rules it reproduces.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Bfp(U256);

impl From<u64> for Bfp {
    fn from(num: u64) -> Self {
        // A u64 times 1e18 always fits into 256 bits.
        Self(U256::from(num) * *ONE_18)
    }
}

impl FromStr for Bfp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (units, decimals) = s.split_once('.').unwrap_or((s, "0"));
        if units.is_empty() || decimals.is_empty() || decimals.len() > 18 {
            bail!("invalid decimal representation {s:?}");
        }
        if !units.bytes().chain(decimals.bytes()).all(|b| b.is_ascii_digit()) {
            bail!("invalid decimal representation {s:?}");
        }

        let units = U256::from_dec_str(units)?
            .checked_mul(*ONE_18)
            .context("too large number")?;
        let decimals = U256::from_dec_str(&format!("{decimals:0<18}"))?;
        Ok(Self(units.checked_add(decimals).context("too large number")?))
    }
}

impl Debug for Bfp {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{}.{:0>18}",
            self.0 / *ONE_18,
            (self.0 % *ONE_18).as_u128()
        )
    }
}

impl Display for Bfp {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        Debug::fmt(self, formatter)
    }
}

impl Bfp {
    pub fn zero() -> Self {
        *ZERO
    }

    pub fn one() -> Self {
        *ONE
    }

    /// The largest representable value.
    pub fn max() -> Self {
        Self(U256::MAX)
    }

    /// Creates a fixed point number from its raw 18-decimal representation.
    pub fn from_wei(num: U256) -> Self {
        Self(num)
    }

    pub fn as_uint256(self) -> U256 {
        self.0
    }

    /// Returns `10^exp` as a fixed point number.
    pub fn exp10(exp: usize) -> Self {
        Self(U256::exp10(exp + 18))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Result<Self, Error> {
        Ok(Self(self.0.badd(other.0)?))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: Self) -> Result<Self, Error> {
        Ok(Self(self.0.bsub(other.0)?))
    }

    pub fn mul_down(self, other: Self) -> Result<Self, Error> {
        Ok(Self(self.0.bmul(other.0)? / *ONE_18))
    }

    pub fn mul_up(self, other: Self) -> Result<Self, Error> {
        let product = self.0.bmul(other.0)?;
        if product.is_zero() {
            Ok(Bfp::zero())
        } else {
            Ok(Self((product - 1) / *ONE_18 + 1))
        }
    }

    pub fn div_down(self, other: Self) -> Result<Self, Error> {
        if other.is_zero() {
            return Err(Error::ZeroDivision);
        }
        if self.is_zero() {
            return Ok(Bfp::zero());
        }
        let a_inflated = self.0.checked_mul(*ONE_18).ok_or(Error::DivInternal)?;
        Ok(Self(a_inflated / other.0))
    }

    pub fn div_up(self, other: Self) -> Result<Self, Error> {
        if other.is_zero() {
            return Err(Error::ZeroDivision);
        }
        if self.is_zero() {
            return Ok(Bfp::zero());
        }
        let a_inflated = self.0.checked_mul(*ONE_18).ok_or(Error::DivInternal)?;
        Ok(Self((a_inflated - 1) / other.0 + 1))
    }

    /// Returns `1 - self`, saturating at zero.
    pub fn complement(self) -> Self {
        if self.0 < *ONE_18 {
            Self(*ONE_18 - self.0)
        } else {
            Bfp::zero()
        }
    }
}
