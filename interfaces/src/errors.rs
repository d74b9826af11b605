use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ParamsError {
    FeeNotPositive = 3001,
    FeeNotLessThanOne = 3002,
    ZeroFeeDenominator = 3003,
    InvalidNativeDenom = 3004,
}
