use crate::denom::is_valid_denom;
use crate::errors::ParamsError;
use soroban_sdk::{contracttype, Env, String};

// An amount of a single denomination.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(e: &Env, denom: &str, amount: u128) -> Self {
        Coin {
            denom: String::from_str(e, denom),
            amount,
        }
    }
}

// Fraction of every swap input retained by the pool: numerator / denominator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fee {
    pub numerator: u128,
    pub denominator: u128,
}

impl Fee {
    pub fn new(numerator: u128, denominator: u128) -> Self {
        Fee {
            numerator,
            denominator,
        }
    }

    // 0.3%
    pub fn default_fee() -> Self {
        Fee::new(3, 1000)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.denominator == 0 {
            return Err(ParamsError::ZeroFeeDenominator);
        }
        if self.numerator == 0 {
            return Err(ParamsError::FeeNotPositive);
        }
        if self.numerator >= self.denominator {
            return Err(ParamsError::FeeNotLessThanOne);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    // 1 - fee, as numerator over the same denominator
    pub fn residue_numerator(&self) -> u128 {
        self.denominator - self.numerator
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Params {
    pub fee: Fee,
    pub native_denom: String,
}

impl Params {
    pub fn new(fee: Fee, native_denom: String) -> Self {
        Params { fee, native_denom }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        self.fee.validate()?;
        if !is_valid_denom(&self.native_denom) {
            return Err(ParamsError::InvalidNativeDenom);
        }
        Ok(())
    }
}
