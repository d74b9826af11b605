#![no_std]

pub mod access;
pub mod errors;
pub mod events;
pub mod management;
pub mod role;
mod storage;
mod test;
