use crate::errors::ParamsError;
use crate::types::{Fee, Params};
use soroban_sdk::{contractclient, Address, Env, String};

// Parameter store holding the swap fee and the native denomination.
// Values are validated before being accepted.
#[contractclient(name = "ParamsClient")]
pub trait CoinswapParamsInterface {
    fn get_params(e: Env) -> Params;

    fn get_fee(e: Env) -> Fee;

    fn get_native_denom(e: Env) -> String;

    fn set_params(e: Env, admin: Address, params: Params) -> Result<(), ParamsError>;

    fn set_fee(e: Env, admin: Address, fee: Fee) -> Result<(), ParamsError>;
}
