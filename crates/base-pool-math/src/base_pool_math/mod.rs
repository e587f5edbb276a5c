//! Liquidity math shared by all pool types: converting between pool shares
//! (BPT) and token amounts for proportional joins and exits, and charging a
//! swap fee on the disproportional part of unbalanced ones.
//!
//! Every rounding decision favours the pool over the account adding or
//! removing liquidity, so that no sequence of operations returns more value
//! than was put in.

use super::{curve::InvariantCurve, error::Error, fixed_point::Bfp};

mod add;
mod proportional;
mod remove;

pub use {
    add::{
        AddLiquiditySingleTokenExactOut,
        AddLiquidityUnbalanced,
        compute_add_liquidity_single_token_exact_out,
        compute_add_liquidity_unbalanced,
    },
    proportional::{compute_proportional_amounts_in, compute_proportional_amounts_out},
    remove::{
        RemoveLiquiditySingleTokenExactIn,
        RemoveLiquiditySingleTokenExactOut,
        compute_remove_liquidity_single_token_exact_in,
        compute_remove_liquidity_single_token_exact_out,
    },
};

/// Fee such that `taxable_amount` remains once the fee is deducted from
/// `taxable_amount + fee`.
fn gross_up_fee(taxable_amount: Bfp, swap_fee_percentage: Bfp) -> Result<Bfp, Error> {
    taxable_amount
        .div_up(swap_fee_percentage.complement())?
        .sub(taxable_amount)
}

fn ensure_same_length(balances: &[Bfp], amounts: &[Bfp]) -> Result<(), Error> {
    if balances.len() != amounts.len() {
        return Err(Error::LengthMismatch {
            expected: balances.len(),
            actual: amounts.len(),
        });
    }
    Ok(())
}

fn token_balance(balances: &[Bfp], token_index: usize) -> Result<Bfp, Error> {
    balances.get(token_index).copied().ok_or(Error::InvalidToken)
}

/// Fee vector charging `fee` on a single token.
fn single_token_fees(len: usize, token_index: usize, fee: Bfp) -> Vec<Bfp> {
    let mut swap_fee_amounts = vec![Bfp::zero(); len];
    swap_fee_amounts[token_index] = fee;
    swap_fee_amounts
}

fn ensure_invariant_ratio_below_maximum<C: InvariantCurve + ?Sized>(
    curve: &C,
    invariant_ratio: Bfp,
) -> Result<(), Error> {
    if invariant_ratio > curve.maximum_invariant_ratio() {
        return Err(Error::InvariantRatioAboveMax);
    }
    Ok(())
}

fn ensure_invariant_ratio_above_minimum<C: InvariantCurve + ?Sized>(
    curve: &C,
    invariant_ratio: Bfp,
) -> Result<(), Error> {
    if invariant_ratio < curve.minimum_invariant_ratio() {
        return Err(Error::InvariantRatioBelowMin);
    }
    Ok(())
}
