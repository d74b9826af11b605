#![no_std]

mod contracts;
mod tests;
mod testutils;
