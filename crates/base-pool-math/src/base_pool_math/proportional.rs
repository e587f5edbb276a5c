use crate::{error::Error, fixed_point::Bfp};

/// Computes the token amounts required to mint exactly `bpt_amount_out`
/// shares without changing the pool's composition.
///
/// ```text
///                      /  bptOut  \
///   amountIn = b  *  | ---------- |
///                      \ bptTotal /
/// ```
///
/// Amounts in round up on both the ratio and the product so the pool is
/// never underfunded.
pub fn compute_proportional_amounts_in(
    balances: &[Bfp],
    total_supply: Bfp,
    bpt_amount_out: Bfp,
) -> Result<Vec<Bfp>, Error> {
    let bpt_ratio = bpt_amount_out.div_up(total_supply)?;
    let amounts_in = balances
        .iter()
        .map(|balance| balance.mul_up(bpt_ratio))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(?bpt_ratio, ?amounts_in, "computed proportional amounts in");
    Ok(amounts_in)
}

/// Computes the token amounts paid out for burning exactly `bpt_amount_in`
/// shares without changing the pool's composition.
///
/// Amounts out round down on both the ratio and the product so the pool
/// never pays more than is owed.
pub fn compute_proportional_amounts_out(
    balances: &[Bfp],
    total_supply: Bfp,
    bpt_amount_in: Bfp,
) -> Result<Vec<Bfp>, Error> {
    let bpt_ratio = bpt_amount_in.div_down(total_supply)?;
    let amounts_out = balances
        .iter()
        .map(|balance| balance.mul_down(bpt_ratio))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(?bpt_ratio, ?amounts_out, "computed proportional amounts out");
    Ok(amounts_out)
}
