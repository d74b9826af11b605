use crate::account::touch_account;
use crate::errors::LedgerError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Map, String, Vec};
use utils::bump::bump_persistent;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Balance(Address, String),
    Denoms(Address),
    Supply(String),
}

fn read_denoms(e: &Env, addr: &Address) -> Vec<String> {
    let key = DataKey::Denoms(addr.clone());
    match e.storage().persistent().get::<DataKey, Vec<String>>(&key) {
        Some(denoms) => {
            bump_persistent(e, &key);
            denoms
        }
        None => Vec::new(e),
    }
}

fn write_denoms(e: &Env, addr: &Address, denoms: &Vec<String>) {
    let key = DataKey::Denoms(addr.clone());
    if denoms.is_empty() {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, denoms);
        bump_persistent(e, &key);
    }
}

fn write_balance(e: &Env, addr: &Address, denom: &String, amount: i128) {
    let key = DataKey::Balance(addr.clone(), denom.clone());
    let mut denoms = read_denoms(e, addr);
    let position = denoms.first_index_of(denom);

    if amount == 0 {
        e.storage().persistent().remove(&key);
        if let Some(index) = position {
            denoms.remove(index);
            write_denoms(e, addr, &denoms);
        }
        return;
    }

    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
    if position.is_none() {
        denoms.push_back(denom.clone());
        write_denoms(e, addr, &denoms);
    }
}

pub fn read_balance(e: &Env, addr: &Address, denom: &String) -> i128 {
    let key = DataKey::Balance(addr.clone(), denom.clone());
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

pub fn read_balances(e: &Env, addr: &Address) -> Map<String, i128> {
    let mut balances = Map::new(e);
    for denom in read_denoms(e, addr).iter() {
        let amount = read_balance(e, addr, &denom);
        balances.set(denom, amount);
    }
    balances
}

pub fn receive_balance(e: &Env, addr: &Address, denom: &String, amount: i128) {
    touch_account(e, addr);
    let balance = read_balance(e, addr, denom);
    write_balance(e, addr, denom, balance + amount);
}

pub fn spend_balance(e: &Env, addr: &Address, denom: &String, amount: i128) {
    let balance = read_balance(e, addr, denom);
    if balance < amount {
        panic_with_error!(e, LedgerError::InsufficientBalance);
    }
    write_balance(e, addr, denom, balance - amount);
}

pub fn read_supply(e: &Env, denom: &String) -> i128 {
    let key = DataKey::Supply(denom.clone());
    match e.storage().persistent().get::<DataKey, i128>(&key) {
        Some(supply) => {
            bump_persistent(e, &key);
            supply
        }
        None => 0,
    }
}

fn write_supply(e: &Env, denom: &String, amount: i128) {
    let key = DataKey::Supply(denom.clone());
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

pub fn increase_supply(e: &Env, denom: &String, amount: i128) {
    write_supply(e, denom, read_supply(e, denom) + amount);
}

pub fn decrease_supply(e: &Env, denom: &String, amount: i128) {
    write_supply(e, denom, read_supply(e, denom) - amount);
}
