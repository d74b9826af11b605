#![no_std]

mod address;
mod contract;
mod events;
mod interface;
mod keeper;
mod ledger;
mod liquidity;
mod params;
mod route;
pub mod errors;
pub mod pool_name;
mod storage;
pub mod swap;
mod test;
mod test_swap;
mod testutils;

pub use contract::{Coinswap, CoinswapClient};
pub use interface::CoinswapTrait;
