//! Constant sum invariant, `V = sum(balances)`.
//!
//! The simplest curve satisfying the [`InvariantCurve`] contract. Pools priced
//! this way trade every token one-to-one, which makes the effect of the
//! liquidity fees easy to reason about.

use super::{curve::InvariantCurve, error::Error, fixed_point::Bfp};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConstantSum {
    pub minimum_invariant_ratio: Bfp,
    pub maximum_invariant_ratio: Bfp,
}

impl Default for ConstantSum {
    fn default() -> Self {
        Self {
            minimum_invariant_ratio: Bfp::zero(),
            maximum_invariant_ratio: Bfp::max(),
        }
    }
}

impl ConstantSum {
    pub fn with_invariant_ratio_bounds(minimum: Bfp, maximum: Bfp) -> Self {
        Self {
            minimum_invariant_ratio: minimum,
            maximum_invariant_ratio: maximum,
        }
    }
}

impl InvariantCurve for ConstantSum {
    fn compute_invariant(&self, balances: &[Bfp]) -> Result<Bfp, Error> {
        balances
            .iter()
            .try_fold(Bfp::zero(), |sum, balance| sum.add(*balance))
    }

    fn compute_balance(
        &self,
        balances: &[Bfp],
        token_index: usize,
        invariant_ratio: Bfp,
    ) -> Result<Bfp, Error> {
        let balance = *balances.get(token_index).ok_or(Error::InvalidToken)?;
        let invariant = self.compute_invariant(balances)?;
        let others = invariant.sub(balance)?;
        // Rounding up makes deposits larger and withdrawals smaller.
        invariant.mul_up(invariant_ratio)?.sub(others)
    }

    fn minimum_invariant_ratio(&self) -> Bfp {
        self.minimum_invariant_ratio
    }

    fn maximum_invariant_ratio(&self) -> Bfp {
        self.maximum_invariant_ratio
    }
}
