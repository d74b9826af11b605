#![no_std]

pub mod bump;
pub mod constant;
pub mod errors;
pub mod storage;
pub mod test_utils;

#[doc(hidden)]
pub use paste;
