use crate::errors::CoinswapError;
use soroban_sdk::{symbol_short, xdr::ToXdr, Address, Bytes, Env, String};

// Pool accounts have no keys: the address is derived from the pool name under
// this contract, the same way a contract deployed with that salt would be addressed.
pub fn pool_address(e: &Env, pool_name: &String) -> Result<Address, CoinswapError> {
    if pool_name.is_empty() {
        return Err(CoinswapError::InvalidPoolName);
    }

    let mut salt = Bytes::new(e);
    salt.append(&symbol_short!("coinswap").to_xdr(e));
    salt.append(&pool_name.clone().to_xdr(e));
    let salt = e.crypto().sha256(&salt);
    Ok(e
        .deployer()
        .with_current_contract(salt.to_bytes())
        .deployed_address())
}
