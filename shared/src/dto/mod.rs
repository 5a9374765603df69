//! Data structures exchanged with the marketplace contract.
//!
//! All values cross the JS boundary as stringified fields (ethers.js
//! BigNumbers are flattened to decimal strings before they reach Rust),
//! so the parsing entry points here take string slices.

pub mod product;

pub use product::*;
