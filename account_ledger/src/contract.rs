//! Account ledger owning every balance of the coinswap system, including the
//! keyless escrow accounts that hold pool reserves.
use crate::account::{create_escrow, escrow_manager, has_account, require_spend_auth};
use crate::balance::{
    decrease_supply, increase_supply, read_balance, read_balances, read_supply, receive_balance,
    spend_balance,
};
use crate::errors::LedgerError;
use crate::events::Events;
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::management::{MultipleAddressesManagementTrait, SingleAddressManagementTrait};
use access_control::role::Role;
use interfaces::AccountLedgerInterface;
use soroban_sdk::{
    contract, contractimpl, contractmeta, panic_with_error, Address, Env, Map, String, Vec,
};
use utils::bump::bump_instance;

contractmeta!(
    key = "Description",
    val = "Multi-denomination account ledger"
);

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, LedgerError::NegativeNotAllowed);
    }
}

fn check_denom(e: &Env, denom: &String) {
    if denom.is_empty() {
        panic_with_error!(e, LedgerError::InvalidDenom);
    }
}

fn require_module(e: &Env, module: &Address) {
    module.require_auth();
    AccessControl::new(e).assert_address_has_role(module, &Role::Module);
}

#[contract]
pub struct AccountLedger;

#[contractimpl]
impl AccountLedger {
    pub fn __constructor(e: Env, admin: Address) {
        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        AccessControlEvents::new(&e).set_role_address(Role::Admin, admin);
    }

    // Replaces the list of modules allowed to create escrow accounts, mint and burn.
    //
    // # Arguments
    //
    // * `admin` - The address of the admin.
    // * `modules` - Addresses of the module contracts.
    pub fn set_modules(e: Env, admin: Address, modules: Vec<Address>) {
        admin.require_auth();
        let access_control = AccessControl::new(&e);
        access_control.assert_address_has_role(&admin, &Role::Admin);
        access_control.set_role_addresses(&Role::Module, &modules);
        AccessControlEvents::new(&e).set_role_addresses(Role::Module, modules);
    }

    pub fn get_modules(e: Env) -> Vec<Address> {
        AccessControl::new(&e).get_role_addresses(&Role::Module)
    }
}

#[contractimpl]
impl AccountLedgerInterface for AccountLedger {
    fn account_exists(e: Env, id: Address) -> bool {
        bump_instance(&e);
        has_account(&e, &id)
    }

    fn account_manager(e: Env, id: Address) -> Option<Address> {
        bump_instance(&e);
        escrow_manager(&e, &id)
    }

    // Registers a keyless escrow account. Spending from it requires the
    // managing module's authorization. An address that has only received
    // funds is converted in place, keeping its balances.
    //
    // # Arguments
    //
    // * `module` - The module which will manage the account.
    // * `id` - The address of the new account.
    fn create_account(e: Env, module: Address, id: Address) {
        require_module(&e, &module);
        bump_instance(&e);

        create_escrow(&e, &id, &module);
        Events::new(&e).create_account(module, id);
    }

    fn balance(e: Env, id: Address, denom: String) -> i128 {
        bump_instance(&e);
        read_balance(&e, &id, &denom)
    }

    fn balances(e: Env, id: Address) -> Map<String, i128> {
        bump_instance(&e);
        read_balances(&e, &id)
    }

    fn supply(e: Env, denom: String) -> i128 {
        bump_instance(&e);
        read_supply(&e, &denom)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128, denom: String) {
        require_spend_auth(&e, &from);
        check_nonnegative_amount(&e, amount);
        check_denom(&e, &denom);
        bump_instance(&e);

        spend_balance(&e, &from, &denom, amount);
        receive_balance(&e, &to, &denom, amount);
        Events::new(&e).transfer(from, to, denom, amount);
    }

    fn mint(e: Env, module: Address, to: Address, amount: i128, denom: String) {
        require_module(&e, &module);
        check_nonnegative_amount(&e, amount);
        check_denom(&e, &denom);
        bump_instance(&e);

        receive_balance(&e, &to, &denom, amount);
        increase_supply(&e, &denom, amount);
        Events::new(&e).mint(module, to, denom, amount);
    }

    fn burn(e: Env, module: Address, from: Address, amount: i128, denom: String) {
        require_module(&e, &module);
        check_nonnegative_amount(&e, amount);
        check_denom(&e, &denom);
        bump_instance(&e);

        spend_balance(&e, &from, &denom, amount);
        decrease_supply(&e, &denom, amount);
        Events::new(&e).burn(module, from, denom, amount);
    }
}
