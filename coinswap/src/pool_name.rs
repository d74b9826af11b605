//! Canonical pool names: `swap:<asset>:<native>`.
//!
//! The name doubles as the denomination of the pool's liquidity shares.
use crate::errors::CoinswapError;
use interfaces::denom::{is_valid_denom, is_valid_denom_bytes, MAX_DENOM_LEN};
use soroban_sdk::{Env, String};

const PREFIX: &[u8] = b"swap";
const SEPARATOR: u8 = b':';

pub const MAX_POOL_NAME_LEN: usize = PREFIX.len() + 2 * (1 + MAX_DENOM_LEN);

/// Builds the name of the pool trading `asset` against `native`.
///
/// Fails with `InvalidDenom` when either denomination is malformed or both are equal.
pub fn build_pool_name(e: &Env, asset: &String, native: &String) -> Result<String, CoinswapError> {
    if !is_valid_denom(asset) || !is_valid_denom(native) || asset == native {
        return Err(CoinswapError::InvalidDenom);
    }

    let mut buf = [0u8; MAX_POOL_NAME_LEN];
    let mut len = PREFIX.len();
    buf[..len].copy_from_slice(PREFIX);
    for denom in [asset, native] {
        buf[len] = SEPARATOR;
        len += 1;
        let denom_len = denom.len() as usize;
        denom.copy_into_slice(&mut buf[len..len + denom_len]);
        len += denom_len;
    }
    Ok(String::from_bytes(e, &buf[..len]))
}

/// Extracts the asset denomination from a pool name, checking that the name
/// is well formed and paired with `native`.
pub fn parse_pool_name(
    e: &Env,
    pool_name: &String,
    native: &String,
) -> Result<String, CoinswapError> {
    let len = pool_name.len() as usize;
    if len == 0 || len > MAX_POOL_NAME_LEN {
        return Err(CoinswapError::InvalidPoolName);
    }
    let mut buf = [0u8; MAX_POOL_NAME_LEN];
    pool_name.copy_into_slice(&mut buf[..len]);

    let mut parts = buf[..len].split(|&c| c == SEPARATOR);
    let (asset, native_part) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(asset), Some(native_part), None) if prefix == PREFIX => {
            (asset, native_part)
        }
        _ => return Err(CoinswapError::InvalidPoolName),
    };
    if !is_valid_denom_bytes(asset) || !is_valid_denom_bytes(native_part) || asset == native_part {
        return Err(CoinswapError::InvalidPoolName);
    }
    if String::from_bytes(e, native_part) != *native {
        return Err(CoinswapError::InvalidPoolName);
    }

    Ok(String::from_bytes(e, asset))
}
