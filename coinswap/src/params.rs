use crate::storage::get_params;
use interfaces::{Fee, ParamsClient};
use soroban_sdk::{Env, String};

// Parameters are read from the store on every call, never cached.
fn client(e: &Env) -> ParamsClient {
    ParamsClient::new(e, &get_params(e))
}

pub(crate) fn get_fee(e: &Env) -> Fee {
    client(e).get_fee()
}

pub(crate) fn get_native_denom(e: &Env) -> String {
    client(e).get_native_denom()
}
