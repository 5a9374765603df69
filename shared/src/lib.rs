//! # Shared Marketplace Types
//!
//! Chain-agnostic data model and helpers for the marketplace frontend.
//! Everything here is pure Rust with no browser dependencies, so it can
//! be unit tested natively even though the main consumer is a WASM
//! crate.
//!
//! ## Structure
//!
//! - **[`dto`]**: data structures decoded from / encoded for the
//!   marketplace contract
//!   - **[`dto::product`]**: the `Product` read projection and the
//!     `NewListing` write payload
//! - **[`units`]**: fixed-point token-amount conversion between decimal
//!   strings and the token's smallest unit
//! - **[`utils`]**: address formatting for display

pub mod dto;
pub mod units;
pub mod utils;

pub use dto::*;
pub use units::*;
pub use utils::*;
