#![cfg(any(test, feature = "testutils"))]

use crate::contract::AccountLedgerArgs;
use crate::{AccountLedger, AccountLedgerClient};
use soroban_sdk::{Address, Env};

pub fn create_ledger<'a>(e: &Env, admin: &Address) -> AccountLedgerClient<'a> {
    AccountLedgerClient::new(
        e,
        &e.register(AccountLedger {}, AccountLedgerArgs::__constructor(admin)),
    )
}
