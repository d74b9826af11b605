use crate::errors::LedgerError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_persistent;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Account(Address),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AccountKind {
    // Brought into existence by a receipt, its owner has never spent from it.
    Unclaimed,
    // Regular account, authorizes its own spending.
    Plain,
    // Keyless account, spending is authorized by the managing module.
    Escrow(Address),
}

pub fn read_account(e: &Env, id: &Address) -> Option<AccountKind> {
    let key = DataKey::Account(id.clone());
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub fn has_account(e: &Env, id: &Address) -> bool {
    read_account(e, id).is_some()
}

fn write_account(e: &Env, id: &Address, kind: &AccountKind) {
    let key = DataKey::Account(id.clone());
    e.storage().persistent().set(&key, kind);
    bump_persistent(e, &key);
}

pub fn escrow_manager(e: &Env, id: &Address) -> Option<Address> {
    match read_account(e, id) {
        Some(AccountKind::Escrow(manager)) => Some(manager),
        _ => None,
    }
}

// An unclaimed account keeps whatever it received when it becomes an escrow.
pub fn create_escrow(e: &Env, id: &Address, manager: &Address) {
    match read_account(e, id) {
        None | Some(AccountKind::Unclaimed) => {
            write_account(e, id, &AccountKind::Escrow(manager.clone()))
        }
        Some(_) => panic_with_error!(e, LedgerError::AccountAlreadyExists),
    }
}

// Receiving funds brings an unclaimed account into existence.
pub fn touch_account(e: &Env, id: &Address) {
    if !has_account(e, id) {
        write_account(e, id, &AccountKind::Unclaimed);
    }
}

pub fn require_spend_auth(e: &Env, id: &Address) {
    match read_account(e, id) {
        Some(AccountKind::Escrow(manager)) => manager.require_auth(),
        Some(AccountKind::Plain) => id.require_auth(),
        None | Some(AccountKind::Unclaimed) => {
            id.require_auth();
            write_account(e, id, &AccountKind::Plain);
        }
    }
}
