#![cfg(test)]
extern crate std;

use crate::contract::CoinswapArgs;
use crate::{Coinswap, CoinswapClient};
use account_ledger::testutils::create_ledger;
use account_ledger::AccountLedgerClient;
use coinswap_params::testutils::{create_params, default_params, NATIVE_DENOM};
use coinswap_params::CoinswapParamsClient;
use interfaces::Coin;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, String};

pub(crate) fn create_coinswap<'a>(e: &Env, ledger: &Address, params: &Address) -> CoinswapClient<'a> {
    CoinswapClient::new(
        e,
        &e.register(Coinswap {}, CoinswapArgs::__constructor(ledger, params)),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    // registered ledger module used to fund test accounts
    pub(crate) faucet: Address,
    pub(crate) users: std::vec::Vec<Address>,

    pub(crate) ledger: AccountLedgerClient<'a>,
    pub(crate) params: CoinswapParamsClient<'a>,
    pub(crate) coinswap: CoinswapClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        Self::with_users(2)
    }
}

impl Setup<'_> {
    pub(crate) fn with_users(users_count: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let faucet = Address::generate(&env);
        let users = (0..users_count)
            .map(|_| Address::generate(&env))
            .collect();

        let ledger = create_ledger(&env, &admin);
        let params = create_params(&env, &admin, &default_params(&env));
        let coinswap = create_coinswap(&env, &ledger.address, &params.address);
        ledger.set_modules(
            &admin,
            &vec![&env, coinswap.address.clone(), faucet.clone()],
        );

        Setup {
            env,
            admin,
            faucet,
            users,
            ledger,
            params,
            coinswap,
        }
    }

    pub(crate) fn denom(&self, denom: &str) -> String {
        String::from_str(&self.env, denom)
    }

    pub(crate) fn native(&self) -> String {
        self.denom(NATIVE_DENOM)
    }

    pub(crate) fn fund(&self, user: &Address, denom: &str, amount: i128) {
        self.ledger
            .mint(&self.faucet, user, &amount, &self.denom(denom));
    }

    pub(crate) fn balance(&self, user: &Address, denom: &str) -> i128 {
        self.ledger.balance(user, &self.denom(denom))
    }

    pub(crate) fn deadline(&self) -> u64 {
        self.env.ledger().timestamp() + 60
    }
}

impl Setup<'_> {
    pub(crate) fn pool_name(&self, asset: &str) -> String {
        self.coinswap.get_pool_name(&self.denom(asset))
    }

    // (asset, native, shares) held by the pool account
    pub(crate) fn pool_reserves(&self, asset: &str) -> (i128, i128, i128) {
        let pool_name = self.pool_name(asset);
        let pool = self.coinswap.get_pool_address(&pool_name);
        (
            self.ledger.balance(&pool, &self.denom(asset)),
            self.ledger.balance(&pool, &self.native()),
            self.ledger.balance(&pool, &pool_name),
        )
    }

    pub(crate) fn seed_pool(
        &self,
        provider: &Address,
        asset: &str,
        asset_amount: u128,
        native_amount: u128,
    ) {
        self.fund(provider, asset, asset_amount as i128);
        self.fund(provider, NATIVE_DENOM, native_amount as i128);
        self.coinswap.add_liquidity(
            provider,
            &Coin::new(&self.env, asset, asset_amount),
            &native_amount,
            &native_amount,
            &self.deadline(),
        );
    }
}
