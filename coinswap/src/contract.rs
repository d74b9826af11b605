use crate::errors::CoinswapError;
use crate::events::Events;
use crate::interface::CoinswapTrait;
use crate::keeper::{
    create_reserve_pool, get_or_create_reserve_pool, get_reserve_pool, PoolReserves, ReservePool,
};
use crate::ledger;
use crate::liquidity::{get_deposit_amounts, get_withdraw_amounts};
use crate::params::{get_fee, get_native_denom};
use crate::pool_name::build_pool_name;
use crate::route::{Fill, Route};
use crate::storage::{get_ledger, get_params, set_ledger, set_params};
use crate::swap::check_invariant;
use interfaces::{Coin, Fee};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, Map, String};

contractmeta!(
    key = "Description",
    val = "Constant product reserve pools against the native denomination"
);

fn check_deadline(e: &Env, deadline: u64) -> Result<(), CoinswapError> {
    if e.ledger().timestamp() > deadline {
        return Err(CoinswapError::DeadlineExpired);
    }
    Ok(())
}

fn check_balance(
    e: &Env,
    owner: &Address,
    denom: &String,
    amount: u128,
) -> Result<(), CoinswapError> {
    if ledger::balance(e, owner, denom) < amount {
        return Err(CoinswapError::InsufficientBalance);
    }
    Ok(())
}

// Moves the funds of a priced route. Everything that can be rejected is
// checked before the first transfer.
fn execute_route(
    e: &Env,
    sender: &Address,
    route: &Route,
    fills: &(Fill, Option<Fill>),
    fee: &Fee,
) -> Result<(), CoinswapError> {
    let (first, second) = fills;
    check_balance(e, sender, route.in_denom(), first.in_amount)?;

    check_invariant(
        e,
        first.in_amount,
        first.out_amount,
        first.in_reserve,
        first.out_reserve,
        fee,
    );
    if let Some(second) = second {
        check_invariant(
            e,
            second.in_amount,
            second.out_amount,
            second.in_reserve,
            second.out_reserve,
            fee,
        );
    }

    let events = Events::new(e);
    let hop = &route.first;
    ledger::transfer(e, sender, &hop.pool.address, first.in_amount, &hop.in_denom);
    events.trade(
        hop.pool.name.clone(),
        sender.clone(),
        hop.in_denom.clone(),
        hop.out_denom.clone(),
        first.in_amount,
        first.out_amount,
        first.fee_amount,
    );

    let (last_hop, last_fill) = match (&route.second, second) {
        (Some(next_hop), Some(second)) => {
            // the intermediate native amount goes straight from pool to pool
            ledger::transfer(
                e,
                &hop.pool.address,
                &next_hop.pool.address,
                first.out_amount,
                &hop.out_denom,
            );
            events.trade(
                next_hop.pool.name.clone(),
                sender.clone(),
                next_hop.in_denom.clone(),
                next_hop.out_denom.clone(),
                second.in_amount,
                second.out_amount,
                second.fee_amount,
            );
            (next_hop, second)
        }
        _ => (hop, first),
    };
    ledger::transfer(
        e,
        &last_hop.pool.address,
        sender,
        last_fill.out_amount,
        &last_hop.out_denom,
    );
    Ok(())
}

#[contract]
pub struct Coinswap;

#[contractimpl]
impl Coinswap {
    pub fn __constructor(e: Env, ledger: Address, params: Address) {
        set_ledger(&e, &ledger);
        set_params(&e, &params);
    }

    pub fn ledger_address(e: Env) -> Address {
        get_ledger(&e)
    }

    pub fn params_address(e: Env) -> Address {
        get_params(&e)
    }
}

#[contractimpl]
impl CoinswapTrait for Coinswap {
    // Creates the escrow account of a reserve pool.
    //
    // # Arguments
    //
    // * `pool_name` - Canonical pool name, `swap:<asset>:<native>`.
    //
    // # Returns
    //
    // The address of the pool account.
    //
    // # Panics
    //
    // If the pool already exists.
    fn create_reserve_pool(e: Env, pool_name: String) -> Result<Address, CoinswapError> {
        let pool = ReservePool::for_name(&e, &pool_name, &get_native_denom(&e))?;
        create_reserve_pool(&e, &pool);
        Ok(pool.address)
    }

    // Reads the pool account balances.
    //
    // # Arguments
    //
    // * `pool_name` - Canonical pool name.
    //
    // # Returns
    //
    // The balance vector of the pool account and `false` if the pool was never created.
    fn get_reserve_pool(
        e: Env,
        pool_name: String,
    ) -> Result<(Map<String, i128>, bool), CoinswapError> {
        let pool = ReservePool::for_name(&e, &pool_name, &get_native_denom(&e))?;
        Ok(get_reserve_pool(&e, &pool))
    }

    fn get_pool_name(e: Env, asset_denom: String) -> Result<String, CoinswapError> {
        build_pool_name(&e, &asset_denom, &get_native_denom(&e))
    }

    fn get_pool_address(e: Env, pool_name: String) -> Result<Address, CoinswapError> {
        Ok(ReservePool::for_name(&e, &pool_name, &get_native_denom(&e))?.address)
    }

    // Deposits liquidity into the pool of `asset.denom`, creating the pool on first use.
    //
    // # Arguments
    //
    // * `depositor` - The address of the depositor.
    // * `asset` - Exact amount of the asset deposited.
    // * `max_native` - The most native the depositor accepts to pay. An empty pool takes all of it.
    // * `min_shares` - The minimum amount of shares to mint.
    // * `deadline` - Last ledger timestamp at which the deposit is accepted.
    //
    // # Returns
    //
    // The amount of shares minted.
    fn add_liquidity(
        e: Env,
        depositor: Address,
        asset: Coin,
        max_native: u128,
        min_shares: u128,
        deadline: u64,
    ) -> Result<u128, CoinswapError> {
        depositor.require_auth();
        check_deadline(&e, deadline)?;

        let pool = ReservePool::for_asset(&e, &asset.denom, &get_native_denom(&e))?;
        let reserves = if pool.exists(&e) {
            pool.reserves(&e)
        } else {
            PoolReserves::empty()
        };

        let (native_amount, shares) = get_deposit_amounts(&e, asset.amount, max_native, &reserves)?;
        if shares < min_shares {
            return Err(CoinswapError::OutMinNotSatisfied);
        }
        check_balance(&e, &depositor, &pool.asset, asset.amount)?;
        check_balance(&e, &depositor, &pool.native, native_amount)?;

        get_or_create_reserve_pool(&e, &pool);
        ledger::transfer(&e, &depositor, &pool.address, asset.amount, &pool.asset);
        ledger::transfer(&e, &depositor, &pool.address, native_amount, &pool.native);
        ledger::mint(&e, &depositor, shares, &pool.name);
        ledger::mint(&e, &pool.address, shares, &pool.name);

        log!(&e, "add_liquidity", pool.name, shares);
        Events::new(&e).add_liquidity(pool.name, depositor, asset.amount, native_amount, shares);

        Ok(shares)
    }

    // Withdraws liquidity from the pool of `min_asset.denom`.
    //
    // # Arguments
    //
    // * `withdrawer` - The address of the share holder.
    // * `min_asset` - The pool asset and the minimum amount of it to receive.
    // * `min_native` - The minimum amount of native to receive.
    // * `shares` - The amount of shares to burn.
    // * `deadline` - Last ledger timestamp at which the withdrawal is accepted.
    //
    // # Returns
    //
    // The amounts of asset and native paid out.
    fn remove_liquidity(
        e: Env,
        withdrawer: Address,
        min_asset: Coin,
        min_native: u128,
        shares: u128,
        deadline: u64,
    ) -> Result<(u128, u128), CoinswapError> {
        withdrawer.require_auth();
        check_deadline(&e, deadline)?;

        let pool = ReservePool::for_asset(&e, &min_asset.denom, &get_native_denom(&e))?;
        let reserves = pool.existing_reserves(&e)?;
        check_balance(&e, &withdrawer, &pool.name, shares)?;

        let (asset_amount, native_amount) = get_withdraw_amounts(&e, shares, &reserves)?;
        if asset_amount < min_asset.amount || native_amount < min_native {
            return Err(CoinswapError::OutMinNotSatisfied);
        }

        ledger::burn(&e, &withdrawer, shares, &pool.name);
        ledger::burn(&e, &pool.address, shares, &pool.name);
        ledger::transfer(&e, &pool.address, &withdrawer, asset_amount, &pool.asset);
        ledger::transfer(&e, &pool.address, &withdrawer, native_amount, &pool.native);

        Events::new(&e).remove_liquidity(
            pool.name,
            withdrawer,
            asset_amount,
            native_amount,
            shares,
        );

        Ok((asset_amount, native_amount))
    }

    // Swaps an exact input amount.
    //
    // # Arguments
    //
    // * `sender` - The address of the trader.
    // * `input` - Denomination and exact amount sold.
    // * `output_denom` - Denomination bought.
    // * `min_output` - The minimum amount of `output_denom` to receive.
    // * `deadline` - Last ledger timestamp at which the swap is accepted.
    //
    // # Returns
    //
    // The amount of `output_denom` received.
    fn swap(
        e: Env,
        sender: Address,
        input: Coin,
        output_denom: String,
        min_output: u128,
        deadline: u64,
    ) -> Result<u128, CoinswapError> {
        sender.require_auth();
        check_deadline(&e, deadline)?;

        let fee = get_fee(&e);
        let route = Route::new(&e, &input.denom, &output_denom, &get_native_denom(&e))?;
        let fills = route.quote_exact_in(&e, input.amount, &fee)?;
        let out_amount = match &fills.1 {
            Some(fill) => fill.out_amount,
            None => fills.0.out_amount,
        };
        if out_amount < min_output {
            return Err(CoinswapError::OutMinNotSatisfied);
        }

        execute_route(&e, &sender, &route, &fills, &fee)?;
        Ok(out_amount)
    }

    // Swaps for an exact output amount.
    //
    // # Arguments
    //
    // * `sender` - The address of the trader.
    // * `input_denom` - Denomination sold.
    // * `output` - Denomination and exact amount bought.
    // * `max_input` - The most `input_denom` the trader accepts to pay.
    // * `deadline` - Last ledger timestamp at which the swap is accepted.
    //
    // # Returns
    //
    // The amount of `input_denom` paid.
    fn swap_strict_receive(
        e: Env,
        sender: Address,
        input_denom: String,
        output: Coin,
        max_input: u128,
        deadline: u64,
    ) -> Result<u128, CoinswapError> {
        sender.require_auth();
        check_deadline(&e, deadline)?;

        let fee = get_fee(&e);
        let route = Route::new(&e, &input_denom, &output.denom, &get_native_denom(&e))?;
        let fills = route.quote_exact_out(&e, output.amount, &fee)?;
        let in_amount = fills.0.in_amount;
        if in_amount > max_input {
            return Err(CoinswapError::InMaxNotSatisfied);
        }

        execute_route(&e, &sender, &route, &fills, &fee)?;
        Ok(in_amount)
    }

    fn estimate_swap(e: Env, input: Coin, output_denom: String) -> Result<u128, CoinswapError> {
        let route = Route::new(&e, &input.denom, &output_denom, &get_native_denom(&e))?;
        let (first, second) = route.quote_exact_in(&e, input.amount, &get_fee(&e))?;
        Ok(second.unwrap_or(first).out_amount)
    }

    fn estimate_swap_strict_receive(
        e: Env,
        input_denom: String,
        output: Coin,
    ) -> Result<u128, CoinswapError> {
        let route = Route::new(&e, &input_denom, &output.denom, &get_native_denom(&e))?;
        let (first, _) = route.quote_exact_out(&e, output.amount, &get_fee(&e))?;
        Ok(first.in_amount)
    }

    fn get_fee(e: Env) -> Fee {
        get_fee(&e)
    }

    fn get_native_denom(e: Env) -> String {
        get_native_denom(&e)
    }
}
