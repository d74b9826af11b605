#![cfg(test)]
extern crate std;

use crate::access::{AccessControl, AccessControlTrait};
use crate::management::{MultipleAddressesManagementTrait, SingleAddressManagementTrait};
use crate::role::{Role, SymbolRepresentation};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, vec, Address, Env, Symbol};

#[contract]
struct Holder;

#[contractimpl]
impl Holder {
    pub fn ping(_e: Env) {}
}

#[test]
fn test_single_and_multiple_roles() {
    let e = Env::default();
    let contract_id = e.register(Holder, ());
    let admin = Address::generate(&e);
    let module_a = Address::generate(&e);
    let module_b = Address::generate(&e);
    let stranger = Address::generate(&e);

    e.as_contract(&contract_id, || {
        let access_control = AccessControl::new(&e);
        assert!(access_control.get_role_safe(&Role::Admin).is_none());
        assert!(!access_control.address_has_role(&admin, &Role::Admin));

        access_control.set_role_address(&Role::Admin, &admin);
        access_control.set_role_addresses(
            &Role::Module,
            &vec![&e, module_a.clone(), module_b.clone()],
        );

        assert_eq!(access_control.get_role(&Role::Admin), admin);
        assert!(access_control.address_has_role(&admin, &Role::Admin));
        assert!(access_control.address_has_role(&module_a, &Role::Module));
        assert!(access_control.address_has_role(&module_b, &Role::Module));
        assert!(!access_control.address_has_role(&stranger, &Role::Module));
        assert!(!access_control.address_has_role(&module_a, &Role::Admin));
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_assert_role_rejects_stranger() {
    let e = Env::default();
    let contract_id = e.register(Holder, ());
    let admin = Address::generate(&e);
    let stranger = Address::generate(&e);

    e.as_contract(&contract_id, || {
        let access_control = AccessControl::new(&e);
        access_control.set_role_address(&Role::Admin, &admin);
        access_control.assert_address_has_role(&stranger, &Role::Admin);
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_single_address_access_to_list_role() {
    let e = Env::default();
    let contract_id = e.register(Holder, ());

    e.as_contract(&contract_id, || {
        AccessControl::new(&e).get_role_safe(&Role::Module);
    });
}

#[test]
fn test_role_symbols() {
    let e = Env::default();
    assert_eq!(Role::Admin.as_symbol(&e), Symbol::new(&e, "Admin"));
    assert_eq!(Role::Module.as_symbol(&e), Symbol::new(&e, "Module"));
}
