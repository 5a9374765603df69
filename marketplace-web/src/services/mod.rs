//! Chain adapters and transaction flows

pub mod contract;
pub mod error;
pub mod gateway;
pub mod listing;
pub mod purchase;
pub mod wallet;

#[cfg(test)]
pub mod testing;
