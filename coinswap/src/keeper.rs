use crate::address::pool_address;
use crate::errors::{CoinswapError, CoinswapFatalError};
use crate::events::Events;
use crate::ledger;
use crate::pool_name::{build_pool_name, parse_pool_name};
use soroban_sdk::{panic_with_error, Address, Env, Map, String};

/// A resolved reserve pool: its name (also the share denomination), the
/// escrow account holding the reserves and the paired denominations.
#[derive(Clone)]
pub(crate) struct ReservePool {
    pub name: String,
    pub address: Address,
    pub asset: String,
    pub native: String,
}

/// Reserves of a pool as seen by the ledger at the time of the read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PoolReserves {
    pub asset: u128,
    pub native: u128,
    pub shares: u128,
}

impl PoolReserves {
    pub fn empty() -> Self {
        PoolReserves {
            asset: 0,
            native: 0,
            shares: 0,
        }
    }

    // The side of the pool holding `denom`, as (reserve of denom, reserve of the other side).
    pub fn oriented(&self, pool: &ReservePool, denom: &String) -> (u128, u128) {
        if *denom == pool.native {
            (self.native, self.asset)
        } else {
            (self.asset, self.native)
        }
    }
}

impl ReservePool {
    pub fn for_asset(e: &Env, asset: &String, native: &String) -> Result<Self, CoinswapError> {
        let name = build_pool_name(e, asset, native)?;
        let address = pool_address(e, &name)?;
        Ok(ReservePool {
            name,
            address,
            asset: asset.clone(),
            native: native.clone(),
        })
    }

    pub fn for_name(e: &Env, name: &String, native: &String) -> Result<Self, CoinswapError> {
        let asset = parse_pool_name(e, name, native)?;
        let address = pool_address(e, name)?;
        Ok(ReservePool {
            name: name.clone(),
            address,
            asset,
            native: native.clone(),
        })
    }

    // Only an escrow managed by this contract counts as the pool account.
    pub fn exists(&self, e: &Env) -> bool {
        ledger::account_manager(e, &self.address) == Some(e.current_contract_address())
    }

    // Every read goes to the ledger.
    pub fn reserves(&self, e: &Env) -> PoolReserves {
        PoolReserves {
            asset: ledger::balance(e, &self.address, &self.asset),
            native: ledger::balance(e, &self.address, &self.native),
            shares: ledger::balance(e, &self.address, &self.name),
        }
    }

    // Reserves of an existing pool, `PoolNotFound` otherwise.
    pub fn existing_reserves(&self, e: &Env) -> Result<PoolReserves, CoinswapError> {
        if !self.exists(e) {
            return Err(CoinswapError::PoolNotFound);
        }
        Ok(self.reserves(e))
    }
}

/// Balance vector of the pool account and whether the account exists.
/// Never creates anything.
pub(crate) fn get_reserve_pool(e: &Env, pool: &ReservePool) -> (Map<String, i128>, bool) {
    if pool.exists(e) {
        (ledger::balances(e, &pool.address), true)
    } else {
        (Map::new(e), false)
    }
}

/// Registers the pool escrow account. A pool is created at most once, a second
/// attempt means the caller lost track of pool state and aborts the invocation.
pub(crate) fn create_reserve_pool(e: &Env, pool: &ReservePool) {
    if pool.exists(e) {
        panic_with_error!(e, CoinswapFatalError::PoolAlreadyExists);
    }
    ledger::create_escrow_account(e, &pool.address);
    Events::new(e).create_pool(pool.name.clone(), pool.address.clone());
}

pub(crate) fn get_or_create_reserve_pool(e: &Env, pool: &ReservePool) {
    if !pool.exists(e) {
        create_reserve_pool(e, pool);
    }
}
