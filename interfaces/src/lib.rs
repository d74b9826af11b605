#![no_std]

pub mod denom;
pub mod errors;
pub mod ledger;
pub mod params;
pub mod types;

pub use ledger::{AccountLedgerInterface, LedgerClient};
pub use params::{CoinswapParamsInterface, ParamsClient};
pub use types::{Coin, Fee, Params};
