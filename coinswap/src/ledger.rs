use crate::errors::CoinswapFatalError;
use crate::storage::get_ledger;
use interfaces::LedgerClient;
use soroban_sdk::{panic_with_error, Address, Env, Map, String};
use utils::errors::MathError;

fn client(e: &Env) -> LedgerClient {
    LedgerClient::new(e, &get_ledger(e))
}

fn to_ledger_amount(e: &Env, amount: u128) -> i128 {
    match i128::try_from(amount) {
        Ok(amount) => amount,
        Err(_) => panic_with_error!(e, MathError::NumberOverflow),
    }
}

pub(crate) fn account_manager(e: &Env, id: &Address) -> Option<Address> {
    client(e).account_manager(id)
}

pub(crate) fn create_escrow_account(e: &Env, id: &Address) {
    client(e).create_account(&e.current_contract_address(), id);
}

pub(crate) fn balance(e: &Env, id: &Address, denom: &String) -> u128 {
    let balance = client(e).balance(id, denom);
    if balance < 0 {
        panic_with_error!(e, CoinswapFatalError::NegativeAmount);
    }
    balance as u128
}

pub(crate) fn balances(e: &Env, id: &Address) -> Map<String, i128> {
    client(e).balances(id)
}

pub(crate) fn transfer(e: &Env, from: &Address, to: &Address, amount: u128, denom: &String) {
    if amount == 0 {
        return;
    }
    client(e).transfer(from, to, &to_ledger_amount(e, amount), denom);
}

pub(crate) fn mint(e: &Env, to: &Address, amount: u128, denom: &String) {
    client(e).mint(
        &e.current_contract_address(),
        to,
        &to_ledger_amount(e, amount),
        denom,
    );
}

pub(crate) fn burn(e: &Env, from: &Address, amount: u128, denom: &String) {
    client(e).burn(
        &e.current_contract_address(),
        from,
        &to_ledger_amount(e, amount),
        denom,
    );
}
