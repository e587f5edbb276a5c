//! The pricing curve a pool plugs into the liquidity math.

use super::{error::Error, fixed_point::Bfp};

/// Curve specific invariant math, implemented once per pool type and passed
/// by reference into every liquidity computation.
///
/// Implementations must be pure: the same balances always yield the same
/// result and no call may observe another. `compute_balance` has to be the
/// inverse of `compute_invariant` along the given token, and the invariant
/// has to be increasing in every balance.
pub trait InvariantCurve {
    /// Computes the invariant of the given balances.
    fn compute_invariant(&self, balances: &[Bfp]) -> Result<Bfp, Error>;

    /// Computes the new balance of `token_index` such that, holding all other
    /// balances fixed, the invariant grows (or shrinks) by `invariant_ratio`.
    fn compute_balance(
        &self,
        balances: &[Bfp],
        token_index: usize,
        invariant_ratio: Bfp,
    ) -> Result<Bfp, Error>;

    /// Smallest ratio by which a single liquidity removal may shrink the
    /// invariant.
    fn minimum_invariant_ratio(&self) -> Bfp {
        Bfp::zero()
    }

    /// Largest ratio by which a single liquidity addition may grow the
    /// invariant.
    fn maximum_invariant_ratio(&self) -> Bfp {
        Bfp::max()
    }
}

impl<T: InvariantCurve + ?Sized> InvariantCurve for &T {
    fn compute_invariant(&self, balances: &[Bfp]) -> Result<Bfp, Error> {
        (**self).compute_invariant(balances)
    }

    fn compute_balance(
        &self,
        balances: &[Bfp],
        token_index: usize,
        invariant_ratio: Bfp,
    ) -> Result<Bfp, Error> {
        (**self).compute_balance(balances, token_index, invariant_ratio)
    }

    fn minimum_invariant_ratio(&self) -> Bfp {
        (**self).minimum_invariant_ratio()
    }

    fn maximum_invariant_ratio(&self) -> Bfp {
        (**self).maximum_invariant_ratio()
    }
}
