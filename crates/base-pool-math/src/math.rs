//! Checked integer arithmetic on raw `U256` values, mirroring the
//! Solidity 0.8 semantics the Balancer vault relies on.

use {super::error::Error, primitive_types::U256};

pub trait BalU256: Sized {
    fn badd(self, b: Self) -> Result<Self, Error>;
    fn bsub(self, b: Self) -> Result<Self, Error>;
    fn bmul(self, b: Self) -> Result<Self, Error>;
    fn bdiv_down(self, b: Self) -> Result<Self, Error>;
    fn bdiv_up(self, b: Self) -> Result<Self, Error>;
}

impl BalU256 for U256 {
    fn badd(self, b: Self) -> Result<Self, Error> {
        self.checked_add(b).ok_or(Error::AddOverflow)
    }

    fn bsub(self, b: Self) -> Result<Self, Error> {
        self.checked_sub(b).ok_or(Error::SubOverflow)
    }

    fn bmul(self, b: Self) -> Result<Self, Error> {
        self.checked_mul(b).ok_or(Error::MulOverflow)
    }

    fn bdiv_down(self, b: Self) -> Result<Self, Error> {
        if b.is_zero() {
            return Err(Error::ZeroDivision);
        }
        Ok(self / b)
    }

    fn bdiv_up(self, b: Self) -> Result<Self, Error> {
        if b.is_zero() {
            return Err(Error::ZeroDivision);
        }
        if self.is_zero() {
            return Ok(U256::zero());
        }
        Ok(U256::one() + (self - U256::one()) / b)
    }
}

/// Computes `a * b / c` rounding down, with a single rounding step.
pub fn mul_div_down(a: U256, b: U256, c: U256) -> Result<U256, Error> {
    a.bmul(b)?.bdiv_down(c)
}

/// Computes `a * b / c` rounding up, with a single rounding step.
pub fn mul_div_up(a: U256, b: U256, c: U256) -> Result<U256, Error> {
    a.bmul(b)?.bdiv_up(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_operations() {
        assert_eq!(U256::MAX.badd(U256::one()), Err(Error::AddOverflow));
        assert_eq!(U256::zero().bsub(U256::one()), Err(Error::SubOverflow));
        assert_eq!(U256::MAX.bmul(2u64.into()), Err(Error::MulOverflow));
        assert_eq!(U256::one().bdiv_down(U256::zero()), Err(Error::ZeroDivision));
        assert_eq!(U256::one().bdiv_up(U256::zero()), Err(Error::ZeroDivision));
    }

    #[test]
    fn division_rounding() {
        assert_eq!(U256::from(7).bdiv_down(2u64.into()).unwrap(), 3u64.into());
        assert_eq!(U256::from(7).bdiv_up(2u64.into()).unwrap(), 4u64.into());
        assert_eq!(U256::from(8).bdiv_up(2u64.into()).unwrap(), 4u64.into());
        assert_eq!(U256::zero().bdiv_up(5u64.into()).unwrap(), U256::zero());
    }

    #[test]
    fn mul_div_rounds_once() {
        let (a, b, c) = (U256::from(10), U256::from(10), U256::from(3));
        assert_eq!(mul_div_down(a, b, c).unwrap(), 33u64.into());
        assert_eq!(mul_div_up(a, b, c).unwrap(), 34u64.into());
        assert_eq!(
            mul_div_up(U256::MAX, 2u64.into(), 2u64.into()),
            Err(Error::MulOverflow)
        );
    }
}
