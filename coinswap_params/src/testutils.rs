#![cfg(any(test, feature = "testutils"))]

use crate::{CoinswapParams, CoinswapParamsClient};
use interfaces::{Fee, Params};
use soroban_sdk::{Address, Env, String};

pub const NATIVE_DENOM: &str = "iris-atto";

pub fn default_params(e: &Env) -> Params {
    Params::new(Fee::default_fee(), String::from_str(e, NATIVE_DENOM))
}

pub fn create_params<'a>(e: &Env, admin: &Address, params: &Params) -> CoinswapParamsClient<'a> {
    CoinswapParamsClient::new(
        e,
        &e.register(CoinswapParams {}, (admin.clone(), params.clone())),
    )
}
