//! Pool scenarios read from TOML files and the quotes computed for them.
//!
//! Token amounts are given in native units as decimal strings, share amounts
//! and percentages as 18 decimal fixed point strings:
//!
//! ```toml
//! total-supply = "1000"
//! swap-fee-percentage = "0.01"
//!
//! [[tokens]]
//! balance = "1000000000"
//! decimals = 6
//!
//! [[tokens]]
//! balance = "1000000000000000000000"
//! decimals = 18
//!
//! [operation]
//! kind = "add-liquidity-unbalanced"
//! exact-amounts-in = ["100000000", "0"]
//! ```

use {
    crate::serialization::DecimalU256,
    anyhow::{Context, Result, ensure},
    base_pool_math::{self as math, Bfp, ConstantSum, TokenScaling},
    primitive_types::U256,
    serde::{Deserialize, Serialize},
    serde_with::{DisplayFromStr, serde_as},
    std::path::Path,
};

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Scenario {
    #[serde_as(as = "DisplayFromStr")]
    pub total_supply: Bfp,
    #[serde_as(as = "DisplayFromStr")]
    pub swap_fee_percentage: Bfp,
    #[serde(default)]
    pub curve: CurveConfig,
    pub tokens: Vec<Token>,
    pub operation: Operation,
}

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Token {
    #[serde_as(as = "DecimalU256")]
    pub balance: U256,
    pub decimals: u8,
}

/// Bounds on how far a single operation may move the invariant. Unbounded by
/// default.
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CurveConfig {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub minimum_invariant_ratio: Option<Bfp>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub maximum_invariant_ratio: Option<Bfp>,
}

impl CurveConfig {
    fn constant_sum(&self) -> ConstantSum {
        let default = ConstantSum::default();
        ConstantSum::with_invariant_ratio_bounds(
            self.minimum_invariant_ratio
                .unwrap_or(default.minimum_invariant_ratio),
            self.maximum_invariant_ratio
                .unwrap_or(default.maximum_invariant_ratio),
        )
    }
}

#[serde_as]
#[derive(Clone, Debug, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "kebab-case",
    rename_all_fields = "kebab-case",
    deny_unknown_fields
)]
pub enum Operation {
    ProportionalAmountsIn {
        #[serde_as(as = "DisplayFromStr")]
        bpt_amount_out: Bfp,
    },
    ProportionalAmountsOut {
        #[serde_as(as = "DisplayFromStr")]
        bpt_amount_in: Bfp,
    },
    AddLiquidityUnbalanced {
        #[serde_as(as = "Vec<DecimalU256>")]
        exact_amounts_in: Vec<U256>,
    },
    AddLiquiditySingleTokenExactOut {
        token_in_index: usize,
        #[serde_as(as = "DisplayFromStr")]
        exact_bpt_amount_out: Bfp,
    },
    RemoveLiquiditySingleTokenExactOut {
        token_out_index: usize,
        #[serde_as(as = "DecimalU256")]
        exact_amount_out: U256,
    },
    RemoveLiquiditySingleTokenExactIn {
        token_out_index: usize,
        #[serde_as(as = "DisplayFromStr")]
        exact_bpt_amount_in: Bfp,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ProportionalAmountsIn { .. } => "proportional-amounts-in",
            Self::ProportionalAmountsOut { .. } => "proportional-amounts-out",
            Self::AddLiquidityUnbalanced { .. } => "add-liquidity-unbalanced",
            Self::AddLiquiditySingleTokenExactOut { .. } => {
                "add-liquidity-single-token-exact-out"
            }
            Self::RemoveLiquiditySingleTokenExactOut { .. } => {
                "remove-liquidity-single-token-exact-out"
            }
            Self::RemoveLiquiditySingleTokenExactIn { .. } => {
                "remove-liquidity-single-token-exact-in"
            }
        }
    }
}

/// Outcome of a liquidity operation in native token units.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub operation: &'static str,
    /// Shares minted or burned.
    #[serde_as(as = "DisplayFromStr")]
    pub bpt_amount: Bfp,
    #[serde_as(as = "Vec<DecimalU256>")]
    pub amounts_in: Vec<U256>,
    #[serde_as(as = "Vec<DecimalU256>")]
    pub amounts_out: Vec<U256>,
    #[serde_as(as = "Vec<DecimalU256>")]
    pub swap_fee_amounts: Vec<U256>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    /// Runs the scenario's operation. Amounts the caller pays are rounded up
    /// to native units, amounts they receive are rounded down.
    pub fn quote(&self) -> Result<Quote> {
        ensure!(!self.tokens.is_empty(), "scenario has no tokens");

        let scalings = self
            .tokens
            .iter()
            .map(|token| TokenScaling::from_decimals(token.decimals))
            .collect::<Result<Vec<_>, _>>()
            .context("unsupported token decimals")?;
        let balances = upscale(
            &scalings,
            &self
                .tokens
                .iter()
                .map(|token| token.balance)
                .collect::<Vec<_>>(),
        )?;
        let curve = self.curve.constant_sum();
        let (total_supply, swap_fee_percentage) = (self.total_supply, self.swap_fee_percentage);

        let mut quote = Quote {
            operation: self.operation.name(),
            bpt_amount: Bfp::zero(),
            amounts_in: vec![U256::zero(); balances.len()],
            amounts_out: vec![U256::zero(); balances.len()],
            swap_fee_amounts: vec![U256::zero(); balances.len()],
        };
        match &self.operation {
            Operation::ProportionalAmountsIn { bpt_amount_out } => {
                let amounts_in =
                    math::compute_proportional_amounts_in(&balances, total_supply, *bpt_amount_out)?;
                quote.bpt_amount = *bpt_amount_out;
                quote.amounts_in = downscale_up(&scalings, &amounts_in)?;
            }
            Operation::ProportionalAmountsOut { bpt_amount_in } => {
                let amounts_out =
                    math::compute_proportional_amounts_out(&balances, total_supply, *bpt_amount_in)?;
                quote.bpt_amount = *bpt_amount_in;
                quote.amounts_out = downscale_down(&scalings, &amounts_out)?;
            }
            Operation::AddLiquidityUnbalanced { exact_amounts_in } => {
                let result = math::compute_add_liquidity_unbalanced(
                    &balances,
                    &upscale(&scalings, exact_amounts_in)?,
                    total_supply,
                    swap_fee_percentage,
                    &curve,
                )?;
                quote.bpt_amount = result.bpt_amount_out;
                quote.amounts_in = exact_amounts_in.clone();
                quote.swap_fee_amounts = downscale_up(&scalings, &result.swap_fee_amounts)?;
            }
            Operation::AddLiquiditySingleTokenExactOut {
                token_in_index,
                exact_bpt_amount_out,
            } => {
                let result = math::compute_add_liquidity_single_token_exact_out(
                    &balances,
                    *token_in_index,
                    *exact_bpt_amount_out,
                    total_supply,
                    swap_fee_percentage,
                    &curve,
                )?;
                quote.bpt_amount = *exact_bpt_amount_out;
                quote.amounts_in[*token_in_index] =
                    scalings[*token_in_index].downscale_up(result.amount_in_with_fee)?;
                quote.swap_fee_amounts = downscale_up(&scalings, &result.swap_fee_amounts)?;
            }
            Operation::RemoveLiquiditySingleTokenExactOut {
                token_out_index,
                exact_amount_out,
            } => {
                let scaling = scalings
                    .get(*token_out_index)
                    .context("token out index out of range")?;
                let result = math::compute_remove_liquidity_single_token_exact_out(
                    &balances,
                    *token_out_index,
                    scaling.upscale(*exact_amount_out)?,
                    total_supply,
                    swap_fee_percentage,
                    &curve,
                )?;
                quote.bpt_amount = result.bpt_amount_in;
                quote.amounts_out[*token_out_index] = *exact_amount_out;
                quote.swap_fee_amounts = downscale_up(&scalings, &result.swap_fee_amounts)?;
            }
            Operation::RemoveLiquiditySingleTokenExactIn {
                token_out_index,
                exact_bpt_amount_in,
            } => {
                let result = math::compute_remove_liquidity_single_token_exact_in(
                    &balances,
                    *token_out_index,
                    *exact_bpt_amount_in,
                    total_supply,
                    swap_fee_percentage,
                    &curve,
                )?;
                quote.bpt_amount = *exact_bpt_amount_in;
                quote.amounts_out[*token_out_index] =
                    scalings[*token_out_index].downscale_down(result.amount_out_with_fee)?;
                quote.swap_fee_amounts = downscale_up(&scalings, &result.swap_fee_amounts)?;
            }
        }
        Ok(quote)
    }
}

fn upscale(scalings: &[TokenScaling], amounts: &[U256]) -> Result<Vec<Bfp>> {
    ensure!(
        scalings.len() == amounts.len(),
        "expected {} token amounts but got {}",
        scalings.len(),
        amounts.len()
    );
    Ok(scalings
        .iter()
        .zip(amounts)
        .map(|(scaling, amount)| scaling.upscale(*amount))
        .collect::<Result<_, _>>()?)
}

fn downscale_up(scalings: &[TokenScaling], amounts: &[Bfp]) -> Result<Vec<U256>> {
    Ok(scalings
        .iter()
        .zip(amounts)
        .map(|(scaling, amount)| scaling.downscale_up(*amount))
        .collect::<Result<_, _>>()?)
}

fn downscale_down(scalings: &[TokenScaling], amounts: &[Bfp]) -> Result<Vec<U256>> {
    Ok(scalings
        .iter()
        .zip(amounts)
        .map(|(scaling, amount)| scaling.downscale_down(*amount))
        .collect::<Result<_, _>>()?)
}
