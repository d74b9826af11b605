use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    AccountAlreadyExists = 601,
    InsufficientBalance = 602,
    NegativeNotAllowed = 604,
    InvalidDenom = 605,
}
