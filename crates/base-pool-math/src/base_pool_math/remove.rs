use {
    super::{
        ensure_invariant_ratio_above_minimum,
        gross_up_fee,
        single_token_fees,
        token_balance,
    },
    crate::{
        curve::InvariantCurve,
        error::Error,
        fixed_point::Bfp,
        math::{BalU256, mul_div_up},
    },
};

/// Result of withdrawing an exact amount of a single token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemoveLiquiditySingleTokenExactOut {
    /// Shares burned from the liquidity provider.
    pub bpt_amount_in: Bfp,
    /// Swap fee, non-zero only for the withdrawn token.
    pub swap_fee_amounts: Vec<Bfp>,
}

/// Result of burning an exact amount of shares for a single token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemoveLiquiditySingleTokenExactIn {
    /// Amount of the token paid out, net of the fee.
    pub amount_out_with_fee: Bfp,
    /// Swap fee, non-zero only for the withdrawn token.
    pub swap_fee_amounts: Vec<Bfp>,
}

/// Computes the shares to burn for withdrawing exactly `exact_amount_out` of
/// one token.
///
/// The withdrawal is treated as a proportional exit plus a swap of the other
/// tokens' shares into the withdrawn one. The fee on that swap stays in the
/// pool, so the shares burned cover the invariant decrease including it.
///
/// Withdrawing the whole balance of the token is rejected with
/// [`Error::SubOverflow`].
pub fn compute_remove_liquidity_single_token_exact_out<C: InvariantCurve + ?Sized>(
    current_balances: &[Bfp],
    token_out_index: usize,
    exact_amount_out: Bfp,
    total_supply: Bfp,
    swap_fee_percentage: Bfp,
    curve: &C,
) -> Result<RemoveLiquiditySingleTokenExactOut, Error> {
    let current_balance = token_balance(current_balances, token_out_index)?;
    if exact_amount_out >= current_balance {
        return Err(Error::SubOverflow);
    }

    let mut new_balances = current_balances.to_vec();
    new_balances[token_out_index] = current_balance.sub(exact_amount_out)?;

    let current_invariant = curve.compute_invariant(current_balances)?;
    // Rounding the ratio and the proportional balance up makes the taxable
    // amount larger.
    let invariant_ratio = curve
        .compute_invariant(&new_balances)?
        .div_up(current_invariant)?;
    ensure_invariant_ratio_above_minimum(curve, invariant_ratio)?;

    let proportional_balance = invariant_ratio.mul_up(current_balance)?;
    let taxable_amount = proportional_balance.sub(new_balances[token_out_index])?;
    let fee = gross_up_fee(taxable_amount, swap_fee_percentage)?;

    new_balances[token_out_index] = new_balances[token_out_index].sub(fee)?;
    let invariant_with_fees_applied = curve.compute_invariant(&new_balances)?;

    // Round up to burn as many shares as the invariant decrease justifies.
    let bpt_amount_in = Bfp::from_wei(mul_div_up(
        total_supply.as_uint256(),
        current_invariant
            .as_uint256()
            .bsub(invariant_with_fees_applied.as_uint256())?,
        current_invariant.as_uint256(),
    )?);

    tracing::debug!(
        token_out_index,
        ?current_invariant,
        ?invariant_with_fees_applied,
        ?taxable_amount,
        ?fee,
        ?bpt_amount_in,
        "computed single token exact out remove liquidity"
    );
    Ok(RemoveLiquiditySingleTokenExactOut {
        bpt_amount_in,
        swap_fee_amounts: single_token_fees(current_balances.len(), token_out_index, fee),
    })
}

/// Computes the amount of one token received for burning exactly
/// `exact_bpt_amount_in` shares.
///
/// The supply ratio is rounded up before solving for the new balance. This
/// yields the smaller amount out but a smaller fee as well: a single rounding
/// direction cannot minimise both, and a correct amount out is what protects
/// the pool. Everything after that rounds to enlarge the fee.
pub fn compute_remove_liquidity_single_token_exact_in<C: InvariantCurve + ?Sized>(
    current_balances: &[Bfp],
    token_out_index: usize,
    exact_bpt_amount_in: Bfp,
    total_supply: Bfp,
    swap_fee_percentage: Bfp,
    curve: &C,
) -> Result<RemoveLiquiditySingleTokenExactIn, Error> {
    let current_balance = token_balance(current_balances, token_out_index)?;
    let new_supply = total_supply.sub(exact_bpt_amount_in)?;

    let invariant_ratio = new_supply.div_up(total_supply)?;
    ensure_invariant_ratio_above_minimum(curve, invariant_ratio)?;

    let new_balance = curve.compute_balance(current_balances, token_out_index, invariant_ratio)?;
    let amount_out = current_balance.sub(new_balance)?;

    // The balance a proportional exit would have left behind, rounded up to
    // enlarge the taxable amount.
    let non_taxable_balance = Bfp::from_wei(mul_div_up(
        new_supply.as_uint256(),
        current_balance.as_uint256(),
        total_supply.as_uint256(),
    )?);
    let taxable_amount = non_taxable_balance.sub(new_balance)?;
    let fee = taxable_amount.mul_up(swap_fee_percentage)?;
    let amount_out_with_fee = amount_out.sub(fee)?;

    tracing::debug!(
        token_out_index,
        ?amount_out,
        ?taxable_amount,
        ?fee,
        "computed single token exact in remove liquidity"
    );
    Ok(RemoveLiquiditySingleTokenExactIn {
        amount_out_with_fee,
        swap_fee_amounts: single_token_fees(current_balances.len(), token_out_index, fee),
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{constant_sum::ConstantSum, error::ErrorKind},
    };

    fn bfp(s: &str) -> Bfp {
        s.parse().unwrap()
    }

    fn pool() -> (Vec<Bfp>, Bfp) {
        (vec![Bfp::from(1000), Bfp::from(1000)], Bfp::from(1000))
    }

    #[test]
    fn single_token_exact_out() {
        let (balances, total_supply) = pool();

        let result = compute_remove_liquidity_single_token_exact_out(
            &balances,
            0,
            Bfp::from(100),
            total_supply,
            bfp("0.01"),
            &ConstantSum::default(),
        )
        .unwrap();

        // A proportional exit shrinking the invariant by 5% would leave 950 of
        // token 0, so 50 of the 100 withdrawn are taxable.
        assert_eq!(
            result.swap_fee_amounts,
            vec![bfp("0.505050505050505051"), Bfp::zero()]
        );
        // ceil(1000 * 100.505050505050505051 / 2000)
        assert_eq!(result.bpt_amount_in, bfp("50.252525252525252526"));
    }

    #[test]
    fn single_token_exact_out_without_fee() {
        let (balances, total_supply) = pool();

        let result = compute_remove_liquidity_single_token_exact_out(
            &balances,
            1,
            Bfp::from(100),
            total_supply,
            Bfp::zero(),
            &ConstantSum::default(),
        )
        .unwrap();

        assert_eq!(result.swap_fee_amounts, vec![Bfp::zero(); 2]);
        assert_eq!(result.bpt_amount_in, Bfp::from(50));
    }

    #[test]
    fn single_token_exact_out_cannot_drain_token() {
        let (balances, total_supply) = pool();
        let curve = ConstantSum::default();

        for swap_fee_percentage in [Bfp::zero(), bfp("0.01")] {
            let err = compute_remove_liquidity_single_token_exact_out(
                &balances,
                0,
                Bfp::from(1000),
                total_supply,
                swap_fee_percentage,
                &curve,
            )
            .unwrap_err();
            assert_eq!(err, Error::SubOverflow);
            assert_eq!(err.kind(), ErrorKind::Underflow);
        }
        assert_eq!(
            compute_remove_liquidity_single_token_exact_out(
                &balances,
                0,
                Bfp::from(1001),
                total_supply,
                bfp("0.01"),
                &curve,
            ),
            Err(Error::SubOverflow)
        );
    }

    #[test]
    fn single_token_exact_out_failures() {
        let (balances, total_supply) = pool();
        let curve = ConstantSum::default();

        assert_eq!(
            compute_remove_liquidity_single_token_exact_out(
                &balances,
                2,
                Bfp::from(100),
                total_supply,
                bfp("0.01"),
                &curve,
            ),
            Err(Error::InvalidToken)
        );
        assert_eq!(
            compute_remove_liquidity_single_token_exact_out(
                &balances,
                0,
                Bfp::from(100),
                total_supply,
                Bfp::one(),
                &curve,
            ),
            Err(Error::ZeroDivision)
        );
        // Withdrawing 600 shrinks the invariant to 70%.
        assert_eq!(
            compute_remove_liquidity_single_token_exact_out(
                &balances,
                0,
                Bfp::from(601),
                total_supply,
                bfp("0.01"),
                &ConstantSum::with_invariant_ratio_bounds(bfp("0.7"), Bfp::max()),
            ),
            Err(Error::InvariantRatioBelowMin)
        );
    }

    #[test]
    fn single_token_exact_in() {
        let (balances, total_supply) = pool();

        let result = compute_remove_liquidity_single_token_exact_in(
            &balances,
            0,
            Bfp::from(50),
            total_supply,
            bfp("0.01"),
            &ConstantSum::default(),
        )
        .unwrap();

        // Burning 5% of the supply is worth 100 tokens, half of which would
        // have come from token 1 in a proportional exit.
        assert_eq!(result.swap_fee_amounts, vec![bfp("0.5"), Bfp::zero()]);
        assert_eq!(result.amount_out_with_fee, bfp("99.5"));
    }

    #[test]
    fn single_token_exact_in_without_fee() {
        let (balances, total_supply) = pool();

        let result = compute_remove_liquidity_single_token_exact_in(
            &balances,
            1,
            Bfp::from(50),
            total_supply,
            Bfp::zero(),
            &ConstantSum::default(),
        )
        .unwrap();

        assert_eq!(result.swap_fee_amounts, vec![Bfp::zero(); 2]);
        assert_eq!(result.amount_out_with_fee, Bfp::from(100));
    }

    #[test]
    fn single_token_exact_in_rounds_against_the_caller() {
        let balances = vec![Bfp::from(1000), Bfp::from(2000)];
        let total_supply = Bfp::from(3);

        let result = compute_remove_liquidity_single_token_exact_in(
            &balances,
            0,
            Bfp::one(),
            total_supply,
            bfp("0.003"),
            &ConstantSum::default(),
        )
        .unwrap();

        // A third of the pool is worth exactly 1000; the caller gets less.
        assert!(result.amount_out_with_fee < Bfp::from(1000));
        assert!(!result.swap_fee_amounts[0].is_zero());
    }

    #[test]
    fn single_token_exact_in_failures() {
        let (balances, total_supply) = pool();
        let curve = ConstantSum::default();

        assert_eq!(
            compute_remove_liquidity_single_token_exact_in(
                &balances,
                0,
                Bfp::from(1001),
                total_supply,
                bfp("0.01"),
                &curve,
            ),
            Err(Error::SubOverflow)
        );
        assert_eq!(
            compute_remove_liquidity_single_token_exact_in(
                &balances,
                0,
                Bfp::zero(),
                Bfp::zero(),
                bfp("0.01"),
                &curve,
            ),
            Err(Error::ZeroDivision)
        );
        assert_eq!(
            compute_remove_liquidity_single_token_exact_in(
                &balances,
                5,
                Bfp::from(10),
                total_supply,
                bfp("0.01"),
                &curve,
            ),
            Err(Error::InvalidToken)
        );
        // More than a single token's balance is worth in a constant sum pool.
        assert_eq!(
            compute_remove_liquidity_single_token_exact_in(
                &balances,
                0,
                Bfp::from(600),
                total_supply,
                bfp("0.01"),
                &curve,
            ),
            Err(Error::SubOverflow)
        );
        assert_eq!(
            compute_remove_liquidity_single_token_exact_in(
                &balances,
                0,
                Bfp::from(301),
                total_supply,
                bfp("0.01"),
                &ConstantSum::with_invariant_ratio_bounds(bfp("0.7"), Bfp::max()),
            ),
            Err(Error::InvariantRatioBelowMin)
        );
    }
}
