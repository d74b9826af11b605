use interfaces::{Fee, Params};
use soroban_sdk::{contracttype, String};
use utils::generate_instance_storage_getter_and_setter;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Fee,
    NativeDenom,
}

generate_instance_storage_getter_and_setter!(fee, DataKey::Fee, Fee);
generate_instance_storage_getter_and_setter!(native_denom, DataKey::NativeDenom, String);

pub(crate) fn get_params(e: &soroban_sdk::Env) -> Params {
    Params::new(get_fee(e), get_native_denom(e))
}

pub(crate) fn set_params(e: &soroban_sdk::Env, params: &Params) {
    set_fee(e, &params.fee);
    set_native_denom(e, &params.native_denom);
}
