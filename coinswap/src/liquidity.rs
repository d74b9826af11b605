use crate::errors::CoinswapError;
use crate::keeper::PoolReserves;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

/// Native amount and shares for a deposit of `asset_amount`, bounded by `max_native`.
///
/// An empty pool takes both amounts as given and mints one share per native unit.
/// Otherwise the native amount keeps the reserve ratio and shares are minted
/// proportionally. Every division rounds down, in favour of the pool.
pub(crate) fn get_deposit_amounts(
    e: &Env,
    asset_amount: u128,
    max_native: u128,
    reserves: &PoolReserves,
) -> Result<(u128, u128), CoinswapError> {
    if asset_amount == 0 {
        return Err(CoinswapError::ZeroAmount);
    }

    if reserves.shares == 0 {
        if max_native == 0 {
            return Err(CoinswapError::ZeroAmount);
        }
        return Ok((max_native, max_native));
    }

    if reserves.asset == 0 || reserves.native == 0 {
        return Err(CoinswapError::EmptyReserve);
    }

    let native_amount = asset_amount.fixed_mul_floor(e, &reserves.native, &reserves.asset);
    if native_amount > max_native {
        return Err(CoinswapError::InMaxNotSatisfied);
    }

    let shares_by_asset = asset_amount.fixed_mul_floor(e, &reserves.shares, &reserves.asset);
    let shares_by_native = native_amount.fixed_mul_floor(e, &reserves.shares, &reserves.native);
    let shares = shares_by_asset.min(shares_by_native);
    if shares == 0 {
        return Err(CoinswapError::ZeroAmount);
    }

    Ok((native_amount, shares))
}

/// Proportional payout `(asset, native)` for burning `shares`, rounded down.
pub(crate) fn get_withdraw_amounts(
    e: &Env,
    shares: u128,
    reserves: &PoolReserves,
) -> Result<(u128, u128), CoinswapError> {
    if shares == 0 {
        return Err(CoinswapError::ZeroAmount);
    }
    if shares > reserves.shares {
        return Err(CoinswapError::InsufficientBalance);
    }

    let asset_amount = shares.fixed_mul_floor(e, &reserves.asset, &reserves.shares);
    let native_amount = shares.fixed_mul_floor(e, &reserves.native, &reserves.shares);
    Ok((asset_amount, native_amount))
}
