#![no_std]

mod account;
mod balance;
mod contract;
pub mod errors;
mod events;
pub mod testutils;

pub use crate::contract::{AccountLedger, AccountLedgerClient};
