//! Seams between the transaction flows and their surroundings.
//!
//! The flows in [`super::purchase`] and [`super::listing`] only talk to
//! these two traits. In the browser they are backed by
//! [`super::contract::ChainGateway`] and the products context; in tests
//! they are backed by recording mocks, which keeps the flow logic
//! runnable without a wallet or a reactive runtime.

use async_trait::async_trait;
use shared::dto::{NewListing, Product};

use super::error::GatewayError;

/// Marketplace and payment-token operations as seen by the flows.
///
/// Reads return `Option`: `None` means "not yet known" (node
/// unreachable, wallet still initializing), never zero. Writes await
/// their confirmations before resolving.
#[async_trait(?Send)]
pub trait MarketplaceGateway {
    /// Whether a wallet session exists and writes can be attempted.
    fn is_ready(&self) -> bool;

    /// Total number of products ever listed.
    async fn products_length(&self) -> Option<u64>;

    /// Read one product record by contract index.
    async fn read_product(&self, id: u64) -> Option<Product>;

    /// Approve the marketplace to spend `amount` of the payment token,
    /// awaiting one confirmation.
    async fn approve_payment(&self, amount: u128) -> Result<(), GatewayError>;

    /// Buy one unit of the product, awaiting the default confirmation
    /// count.
    async fn buy_product(&self, id: u64) -> Result<(), GatewayError>;

    /// Create a new listing, awaiting confirmation.
    async fn write_product(&self, listing: &NewListing) -> Result<(), GatewayError>;

    /// Payment-token balance of `owner`, in the smallest unit.
    async fn token_balance(&self, owner: &str) -> Option<u128>;
}

/// Where flows report their user-visible status.
///
/// Implemented by the products context; flows never touch signals
/// directly.
pub trait StatusSink {
    fn set_loading(&self, message: &str);
    fn set_error(&self, message: &str);
    fn set_success(&self, message: &str);
    fn clear_loading(&self);
}
