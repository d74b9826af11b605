use soroban_sdk::contracterror;

// Rejections of a caller's request. Returned as values, no state is changed.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CoinswapError {
    InvalidPoolName = 2001,
    InvalidDenom = 2002,
    ZeroAmount = 2003,
    DeadlineExpired = 2004,
    InMaxNotSatisfied = 2005,
    OutMinNotSatisfied = 2006,
    InsufficientBalance = 2007,
    EmptyReserve = 2008,
    PoolNotFound = 2009,
    InsufficientLiquidity = 2010,
    CannotSwapSameDenom = 2011,
}

// Broken invariants. Raised with `panic_with_error!`, aborting the whole invocation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CoinswapFatalError {
    PoolAlreadyExists = 201,
    InvariantDoesNotHold = 202,
    FeeOutOfBounds = 203,
    NegativeAmount = 204,
}
