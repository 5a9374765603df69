//! Process-wide application state

pub mod products;
pub mod wallet;
