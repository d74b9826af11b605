#![cfg(test)]
extern crate std;

use crate::contracts;
use interfaces::Coin;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, String};

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) admin: Address,
    pub(crate) faucet: Address,
    pub(crate) ledger: contracts::ledger::Client<'a>,
    pub(crate) params: contracts::params::Client<'a>,
    pub(crate) coinswap: contracts::coinswap::Client<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        Self::setup()
    }
}

impl Setup<'_> {
    pub(crate) fn setup() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let faucet = Address::generate(&e);

        let ledger = contracts::ledger::deploy(&e, &admin);
        let params = contracts::params::deploy(&e, &admin, &contracts::params::default_params(&e));
        let coinswap = contracts::coinswap::Client::new(
            &e,
            &e.register(
                contracts::coinswap::Contract {},
                (ledger.address.clone(), params.address.clone()),
            ),
        );
        ledger.set_modules(&admin, &vec![&e, coinswap.address.clone(), faucet.clone()]);

        Self {
            env: e,
            admin,
            faucet,
            ledger,
            params,
            coinswap,
        }
    }

    pub(crate) fn denom(&self, denom: &str) -> String {
        String::from_str(&self.env, denom)
    }

    pub(crate) fn native(&self) -> String {
        self.denom(contracts::params::NATIVE_DENOM)
    }

    pub(crate) fn coin(&self, denom: &str, amount: u128) -> Coin {
        Coin::new(&self.env, denom, amount)
    }

    pub(crate) fn fund(&self, user: &Address, denom: &str, amount: i128) {
        self.ledger
            .mint(&self.faucet, user, &amount, &self.denom(denom));
    }

    pub(crate) fn balance(&self, user: &Address, denom: &str) -> i128 {
        self.ledger.balance(user, &self.denom(denom))
    }

    pub(crate) fn shares(&self, user: &Address, asset: &str) -> i128 {
        let pool_name = self.coinswap.get_pool_name(&self.denom(asset));
        self.ledger.balance(user, &pool_name)
    }

    pub(crate) fn deadline(&self) -> u64 {
        self.env.ledger().timestamp() + 600
    }
}
