use soroban_sdk::{contracttype, Address};
use utils::generate_instance_storage_getter_and_setter;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Ledger,
    Params,
}

generate_instance_storage_getter_and_setter!(ledger, DataKey::Ledger, Address);
generate_instance_storage_getter_and_setter!(params, DataKey::Params, Address);
