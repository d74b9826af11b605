//! Constant-product pricing with the fee taken on the input side.
use crate::errors::{CoinswapError, CoinswapFatalError};
use interfaces::Fee;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env, U256};
use utils::errors::MathError;

fn check_fee(e: &Env, fee: &Fee) {
    if !fee.is_valid() {
        panic_with_error!(e, CoinswapFatalError::FeeOutOfBounds);
    }
}

fn check_reserves(in_reserve: u128, out_reserve: u128) -> Result<(), CoinswapError> {
    if in_reserve == 0 || out_reserve == 0 {
        return Err(CoinswapError::EmptyReserve);
    }
    Ok(())
}

/// Output bought by `in_amount`:
/// `out_reserve * in * (1 - fee) / (in_reserve + in * (1 - fee))`, rounded down.
pub fn get_amount_out(
    e: &Env,
    in_amount: u128,
    in_reserve: u128,
    out_reserve: u128,
    fee: &Fee,
) -> Result<u128, CoinswapError> {
    check_fee(e, fee);
    check_reserves(in_reserve, out_reserve)?;
    if in_amount == 0 {
        return Err(CoinswapError::ZeroAmount);
    }

    let denominator = U256::from_u128(e, fee.denominator);
    let in_after_fee = U256::from_u128(e, in_amount).mul(&U256::from_u128(e, fee.residue_numerator()));
    let numerator = U256::from_u128(e, out_reserve).mul(&in_after_fee);
    let divisor = U256::from_u128(e, in_reserve).mul(&denominator).add(&in_after_fee);

    match numerator.div(&divisor).to_u128() {
        Some(out) => Ok(out),
        None => panic_with_error!(e, MathError::NumberOverflow),
    }
}

/// Input needed to buy exactly `out_amount`:
/// `in_reserve * out / ((out_reserve - out) * (1 - fee))`, rounded up.
pub fn get_amount_in(
    e: &Env,
    out_amount: u128,
    in_reserve: u128,
    out_reserve: u128,
    fee: &Fee,
) -> Result<u128, CoinswapError> {
    check_fee(e, fee);
    check_reserves(in_reserve, out_reserve)?;
    if out_amount == 0 {
        return Err(CoinswapError::ZeroAmount);
    }
    if out_amount >= out_reserve {
        return Err(CoinswapError::InsufficientLiquidity);
    }

    let in_after_fee = in_reserve.fixed_mul_ceil(e, &out_amount, &(out_reserve - out_amount));
    Ok(in_after_fee.fixed_mul_ceil(e, &fee.denominator, &fee.residue_numerator()))
}

/// Part of `in_amount` retained by the pool.
pub fn fee_amount(e: &Env, in_amount: u128, fee: &Fee) -> u128 {
    in_amount - in_amount.fixed_mul_floor(e, &fee.residue_numerator(), &fee.denominator)
}

/// Aborts unless the reserves product, counting only the input net of fee, does not decrease:
/// `(in_reserve + in * (1 - fee)) * (out_reserve - out) >= in_reserve * out_reserve`.
pub fn check_invariant(
    e: &Env,
    in_amount: u128,
    out_amount: u128,
    in_reserve: u128,
    out_reserve: u128,
    fee: &Fee,
) {
    check_fee(e, fee);
    if out_amount > out_reserve {
        panic_with_error!(e, CoinswapFatalError::InvariantDoesNotHold);
    }

    let denominator = U256::from_u128(e, fee.denominator);
    let in_after_fee = U256::from_u128(e, in_amount).mul(&U256::from_u128(e, fee.residue_numerator()));
    let scaled_in_reserve = U256::from_u128(e, in_reserve).mul(&denominator);

    let new_product = scaled_in_reserve
        .add(&in_after_fee)
        .mul(&U256::from_u128(e, out_reserve - out_amount));
    let old_product = scaled_in_reserve.mul(&U256::from_u128(e, out_reserve));

    if new_product < old_product {
        panic_with_error!(e, CoinswapFatalError::InvariantDoesNotHold);
    }
}
