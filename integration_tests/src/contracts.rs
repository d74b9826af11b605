#![cfg(test)]

pub(crate) mod ledger {
    pub(crate) use account_ledger::testutils::create_ledger as deploy;
    pub(crate) use account_ledger::AccountLedgerClient as Client;
}
pub(crate) mod params {
    pub(crate) use coinswap_params::testutils::create_params as deploy;
    pub(crate) use coinswap_params::testutils::{default_params, NATIVE_DENOM};
    pub(crate) use coinswap_params::CoinswapParamsClient as Client;
}
pub(crate) mod coinswap {
    pub(crate) use ::coinswap::errors::CoinswapError as Error;
    pub(crate) use ::coinswap::Coinswap as Contract;
    pub(crate) use ::coinswap::CoinswapClient as Client;
}
