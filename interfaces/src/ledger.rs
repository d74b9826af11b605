use soroban_sdk::{contractclient, Address, Env, Map, String};

// Account ledger consumed by the coinswap module. The ledger exclusively owns
// balances; every balance mutation is atomic within the invoking transaction.
#[contractclient(name = "LedgerClient")]
pub trait AccountLedgerInterface {
    // Whether the account was created explicitly or has ever received funds.
    fn account_exists(e: Env, id: Address) -> bool;

    // Module managing the escrow account `id`, if it is one.
    fn account_manager(e: Env, id: Address) -> Option<Address>;

    // Register `id` as an escrow account managed by `module`.
    fn create_account(e: Env, module: Address, id: Address);

    fn balance(e: Env, id: Address, denom: String) -> i128;

    // Non-zero balances of the account keyed by denomination.
    fn balances(e: Env, id: Address) -> Map<String, i128>;

    fn supply(e: Env, denom: String) -> i128;

    fn transfer(e: Env, from: Address, to: Address, amount: i128, denom: String);

    fn mint(e: Env, module: Address, to: Address, amount: i128, denom: String);

    fn burn(e: Env, module: Address, from: Address, amount: i128, denom: String);
}
