use crate::events::Events;
use crate::storage::{get_fee, get_native_denom, get_params, set_fee, set_params};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::management::SingleAddressManagementTrait;
use access_control::role::Role;
use interfaces::errors::ParamsError;
use interfaces::{CoinswapParamsInterface, Fee, Params};
use soroban_sdk::{contract, contractimpl, contractmeta, panic_with_error, Address, Env, String};
use utils::bump::bump_instance;

contractmeta!(
    key = "Description",
    val = "Coinswap parameter store"
);

fn require_admin(e: &Env, admin: &Address) {
    admin.require_auth();
    AccessControl::new(e).assert_address_has_role(admin, &Role::Admin);
}

#[contract]
pub struct CoinswapParams;

#[contractimpl]
impl CoinswapParams {
    // Initial parameters must be valid, a store never holds an invalid fee.
    pub fn __constructor(e: Env, admin: Address, params: Params) {
        if let Err(err) = params.validate() {
            panic_with_error!(&e, err);
        }
        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        set_params(&e, &params);
        AccessControlEvents::new(&e).set_role_address(Role::Admin, admin);
    }

    pub fn get_admin(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Admin)
    }
}

#[contractimpl]
impl CoinswapParamsInterface for CoinswapParams {
    fn get_params(e: Env) -> Params {
        get_params(&e)
    }

    fn get_fee(e: Env) -> Fee {
        get_fee(&e)
    }

    fn get_native_denom(e: Env) -> String {
        get_native_denom(&e)
    }

    // Replaces both parameters at once.
    //
    // # Arguments
    //
    // * `admin` - The address of the admin.
    // * `params` - New fee and native denomination.
    //
    // # Errors
    //
    // Returns the validation error and leaves the stored values untouched
    // if `params` is invalid.
    fn set_params(e: Env, admin: Address, params: Params) -> Result<(), ParamsError> {
        require_admin(&e, &admin);
        params.validate()?;

        bump_instance(&e);
        set_params(&e, &params);
        Events::new(&e).set_params(params.fee, params.native_denom);
        Ok(())
    }

    fn set_fee(e: Env, admin: Address, fee: Fee) -> Result<(), ParamsError> {
        require_admin(&e, &admin);
        fee.validate()?;

        set_fee(&e, &fee);
        Events::new(&e).set_params(fee, get_native_denom(&e));
        Ok(())
    }
}
