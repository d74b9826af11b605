use crate::errors::CoinswapError;
use interfaces::{Coin, Fee};
use soroban_sdk::{Address, Env, Map, String};

pub trait CoinswapTrait {
    // Creates the escrow account of a reserve pool. Aborts if the pool already exists.
    fn create_reserve_pool(e: Env, pool_name: String) -> Result<Address, CoinswapError>;

    // Balance vector of the pool account and whether the pool exists.
    fn get_reserve_pool(e: Env, pool_name: String)
        -> Result<(Map<String, i128>, bool), CoinswapError>;

    // Name of the pool pairing `asset_denom` with the native denomination.
    fn get_pool_name(e: Env, asset_denom: String) -> Result<String, CoinswapError>;

    fn get_pool_address(e: Env, pool_name: String) -> Result<Address, CoinswapError>;

    // Deposits `asset` and up to `max_native` of native into the pool, minting shares.
    fn add_liquidity(
        e: Env,
        depositor: Address,
        asset: Coin,
        max_native: u128,
        min_shares: u128,
        deadline: u64,
    ) -> Result<u128, CoinswapError>;

    // Burns `shares` and pays out the proportional part of both reserves.
    fn remove_liquidity(
        e: Env,
        withdrawer: Address,
        min_asset: Coin,
        min_native: u128,
        shares: u128,
        deadline: u64,
    ) -> Result<(u128, u128), CoinswapError>;

    // Sells exactly `input` for at least `min_output` of `output_denom`.
    fn swap(
        e: Env,
        sender: Address,
        input: Coin,
        output_denom: String,
        min_output: u128,
        deadline: u64,
    ) -> Result<u128, CoinswapError>;

    // Buys exactly `output` paying at most `max_input` of `input_denom`.
    fn swap_strict_receive(
        e: Env,
        sender: Address,
        input_denom: String,
        output: Coin,
        max_input: u128,
        deadline: u64,
    ) -> Result<u128, CoinswapError>;

    fn estimate_swap(e: Env, input: Coin, output_denom: String) -> Result<u128, CoinswapError>;

    fn estimate_swap_strict_receive(
        e: Env,
        input_denom: String,
        output: Coin,
    ) -> Result<u128, CoinswapError>;

    fn get_fee(e: Env) -> Fee;

    fn get_native_denom(e: Env) -> String;
}
