use crate::errors::CoinswapError;
use crate::keeper::ReservePool;
use crate::swap::{fee_amount, get_amount_in, get_amount_out};
use interfaces::Fee;
use soroban_sdk::{Env, String};

/// One pool a trade passes through.
#[derive(Clone)]
pub(crate) struct Hop {
    pub pool: ReservePool,
    pub in_denom: String,
    pub out_denom: String,
}

/// Amounts of a priced hop together with the reserves they were priced against.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Fill {
    pub in_amount: u128,
    pub out_amount: u128,
    pub fee_amount: u128,
    pub in_reserve: u128,
    pub out_reserve: u128,
}

/// A trade goes through a single pool when one side is native, otherwise
/// through the input asset pool into native and the output asset pool out of it.
pub(crate) struct Route {
    pub first: Hop,
    pub second: Option<Hop>,
}

impl Hop {
    fn new(
        e: &Env,
        asset: &String,
        native: &String,
        in_denom: &String,
        out_denom: &String,
    ) -> Result<Self, CoinswapError> {
        Ok(Hop {
            pool: ReservePool::for_asset(e, asset, native)?,
            in_denom: in_denom.clone(),
            out_denom: out_denom.clone(),
        })
    }

    fn reserves(&self, e: &Env) -> Result<(u128, u128), CoinswapError> {
        let reserves = self.pool.existing_reserves(e)?;
        Ok(reserves.oriented(&self.pool, &self.in_denom))
    }

    fn fill_exact_in(&self, e: &Env, in_amount: u128, fee: &Fee) -> Result<Fill, CoinswapError> {
        let (in_reserve, out_reserve) = self.reserves(e)?;
        let out_amount = get_amount_out(e, in_amount, in_reserve, out_reserve, fee)?;
        if out_amount == 0 {
            return Err(CoinswapError::ZeroAmount);
        }
        Ok(Fill {
            in_amount,
            out_amount,
            fee_amount: fee_amount(e, in_amount, fee),
            in_reserve,
            out_reserve,
        })
    }

    fn fill_exact_out(&self, e: &Env, out_amount: u128, fee: &Fee) -> Result<Fill, CoinswapError> {
        let (in_reserve, out_reserve) = self.reserves(e)?;
        let in_amount = get_amount_in(e, out_amount, in_reserve, out_reserve, fee)?;
        Ok(Fill {
            in_amount,
            out_amount,
            fee_amount: fee_amount(e, in_amount, fee),
            in_reserve,
            out_reserve,
        })
    }
}

impl Route {
    pub fn new(
        e: &Env,
        in_denom: &String,
        out_denom: &String,
        native: &String,
    ) -> Result<Self, CoinswapError> {
        if in_denom == out_denom {
            return Err(CoinswapError::CannotSwapSameDenom);
        }

        if in_denom == native {
            return Ok(Route {
                first: Hop::new(e, out_denom, native, in_denom, out_denom)?,
                second: None,
            });
        }
        if out_denom == native {
            return Ok(Route {
                first: Hop::new(e, in_denom, native, in_denom, out_denom)?,
                second: None,
            });
        }

        Ok(Route {
            first: Hop::new(e, in_denom, native, in_denom, native)?,
            second: Some(Hop::new(e, out_denom, native, native, out_denom)?),
        })
    }

    pub fn in_denom(&self) -> &String {
        &self.first.in_denom
    }

    /// Prices the route for an exact input, leg by leg.
    pub fn quote_exact_in(
        &self,
        e: &Env,
        in_amount: u128,
        fee: &Fee,
    ) -> Result<(Fill, Option<Fill>), CoinswapError> {
        let first = self.first.fill_exact_in(e, in_amount, fee)?;
        let second = match &self.second {
            Some(hop) => Some(hop.fill_exact_in(e, first.out_amount, fee)?),
            None => None,
        };
        Ok((first, second))
    }

    /// Prices the route for an exact output, walking it backwards.
    pub fn quote_exact_out(
        &self,
        e: &Env,
        out_amount: u128,
        fee: &Fee,
    ) -> Result<(Fill, Option<Fill>), CoinswapError> {
        match &self.second {
            None => Ok((self.first.fill_exact_out(e, out_amount, fee)?, None)),
            Some(hop) => {
                let second = hop.fill_exact_out(e, out_amount, fee)?;
                let first = self.first.fill_exact_out(e, second.in_amount, fee)?;
                Ok((first, Some(second)))
            }
        }
    }
}
