use {
    super::{
        ensure_invariant_ratio_below_maximum,
        ensure_same_length,
        gross_up_fee,
        single_token_fees,
        token_balance,
    },
    crate::{
        curve::InvariantCurve,
        error::Error,
        fixed_point::Bfp,
        math::{BalU256, mul_div_down},
    },
};

/// Result of adding arbitrary token amounts to a pool.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddLiquidityUnbalanced {
    /// Shares minted to the liquidity provider.
    pub bpt_amount_out: Bfp,
    /// Swap fee charged per token on the part of the deposit exceeding the
    /// pool's composition.
    pub swap_fee_amounts: Vec<Bfp>,
}

/// Result of adding a single token for an exact amount of shares.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddLiquiditySingleTokenExactOut {
    /// Amount of the token to deposit, fee included.
    pub amount_in_with_fee: Bfp,
    /// Swap fee, non-zero only for the deposited token.
    pub swap_fee_amounts: Vec<Bfp>,
}

/// Computes the shares minted for depositing `exact_amounts` of every token.
///
/// The deposit is treated as a proportional deposit plus a swap of the
/// excess. Whatever a token contributes beyond the proportional balance
/// implied by the new invariant is charged the swap fee, and the shares
/// reflect the invariant growth after those fees.
pub fn compute_add_liquidity_unbalanced<C: InvariantCurve + ?Sized>(
    current_balances: &[Bfp],
    exact_amounts: &[Bfp],
    total_supply: Bfp,
    swap_fee_percentage: Bfp,
    curve: &C,
) -> Result<AddLiquidityUnbalanced, Error> {
    ensure_same_length(current_balances, exact_amounts)?;

    let mut new_balances = current_balances
        .iter()
        .zip(exact_amounts)
        .map(|(balance, amount)| balance.add(*amount))
        .collect::<Result<Vec<_>, _>>()?;

    let current_invariant = curve.compute_invariant(current_balances)?;
    let new_invariant = curve.compute_invariant(&new_balances)?;
    let invariant_ratio = new_invariant.div_down(current_invariant)?;
    ensure_invariant_ratio_below_maximum(curve, invariant_ratio)?;

    let mut swap_fee_amounts = vec![Bfp::zero(); current_balances.len()];
    for ((new_balance, current_balance), swap_fee_amount) in new_balances
        .iter_mut()
        .zip(current_balances)
        .zip(&mut swap_fee_amounts)
    {
        // Rounding the proportional balance down makes the taxable amount,
        // and with it the fee, larger.
        let proportional_balance = invariant_ratio.mul_down(*current_balance)?;
        if *new_balance > proportional_balance {
            let taxable_amount = new_balance.sub(proportional_balance)?;
            *swap_fee_amount = taxable_amount.mul_up(swap_fee_percentage)?;
            *new_balance = new_balance.sub(*swap_fee_amount)?;
        }
    }

    let invariant_with_fees_applied = curve.compute_invariant(&new_balances)?;
    let bpt_amount_out = Bfp::from_wei(mul_div_down(
        total_supply.as_uint256(),
        invariant_with_fees_applied
            .as_uint256()
            .bsub(current_invariant.as_uint256())?,
        current_invariant.as_uint256(),
    )?);

    tracing::debug!(
        ?current_invariant,
        ?invariant_with_fees_applied,
        ?bpt_amount_out,
        ?swap_fee_amounts,
        "computed unbalanced add liquidity"
    );
    Ok(AddLiquidityUnbalanced {
        bpt_amount_out,
        swap_fee_amounts,
    })
}

/// Computes the amount of a single token needed to mint exactly
/// `exact_bpt_amount_out` shares.
///
/// The curve solves for the token balance that grows the invariant in step
/// with the supply. The part of that growth a proportional deposit would not
/// have required is taxable, and the fee is grossed up so that the taxable
/// amount is what remains after the fee.
pub fn compute_add_liquidity_single_token_exact_out<C: InvariantCurve + ?Sized>(
    current_balances: &[Bfp],
    token_in_index: usize,
    exact_bpt_amount_out: Bfp,
    total_supply: Bfp,
    swap_fee_percentage: Bfp,
    curve: &C,
) -> Result<AddLiquiditySingleTokenExactOut, Error> {
    let current_balance = token_balance(current_balances, token_in_index)?;
    let new_supply = exact_bpt_amount_out.add(total_supply)?;

    // Rounding the ratio up makes the solved balance, and therefore the
    // amount in, larger.
    let invariant_ratio = new_supply.div_up(total_supply)?;
    ensure_invariant_ratio_below_maximum(curve, invariant_ratio)?;

    let new_balance = curve.compute_balance(current_balances, token_in_index, invariant_ratio)?;
    let amount_in = new_balance.sub(current_balance)?;

    // The balance a proportional deposit would have reached, rounded down to
    // enlarge the taxable amount.
    let non_taxable_balance = Bfp::from_wei(mul_div_down(
        new_supply.as_uint256(),
        current_balance.as_uint256(),
        total_supply.as_uint256(),
    )?);
    let taxable_amount = new_balance.sub(non_taxable_balance)?;
    let fee = gross_up_fee(taxable_amount, swap_fee_percentage)?;
    let amount_in_with_fee = amount_in.add(fee)?;

    tracing::debug!(
        token_in_index,
        ?amount_in,
        ?taxable_amount,
        ?fee,
        "computed single token exact out add liquidity"
    );
    Ok(AddLiquiditySingleTokenExactOut {
        amount_in_with_fee,
        swap_fee_amounts: single_token_fees(current_balances.len(), token_in_index, fee),
    })
}
