//! Liquidity accounting for Balancer style pools.
//!
//! Computes how many pool shares are minted or burned when liquidity is
//! added or removed, and which swap fees apply when that happens
//! disproportionally to the pool's balances. The curve specific invariant
//! math is supplied by the caller through [`InvariantCurve`].

pub mod base_pool_math;
pub mod constant_sum;
pub mod curve;
pub mod error;
pub mod fixed_point;
pub mod math;
pub mod scaling;

pub use {
    base_pool_math::{
        AddLiquiditySingleTokenExactOut,
        AddLiquidityUnbalanced,
        RemoveLiquiditySingleTokenExactIn,
        RemoveLiquiditySingleTokenExactOut,
        compute_add_liquidity_single_token_exact_out,
        compute_add_liquidity_unbalanced,
        compute_proportional_amounts_in,
        compute_proportional_amounts_out,
        compute_remove_liquidity_single_token_exact_in,
        compute_remove_liquidity_single_token_exact_out,
    },
    constant_sum::ConstantSum,
    curve::InvariantCurve,
    error::{Error, ErrorKind},
    fixed_point::Bfp,
    scaling::TokenScaling,
};
