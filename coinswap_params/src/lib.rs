#![no_std]

mod contract;
mod events;
mod storage;
pub mod testutils;

pub use crate::contract::{CoinswapParams, CoinswapParamsClient};
