//! Approve-then-purchase flow.
//!
//! The two steps are not atomic: once the approval is confirmed the
//! allowance is granted, and a purchase failure afterwards (stock
//! depleted by a concurrent buyer, rejection in the wallet) leaves it
//! granted and unused. Nothing revokes it; the user simply retries.

use super::error::GatewayError;
use super::gateway::{MarketplaceGateway, StatusSink};

/// Buy one unit of a product.
///
/// Reports progress and errors into `status`; loading is cleared on
/// every exit path. Returns the current on-chain product count on
/// success so the caller can rebuild the store from it, `None`
/// otherwise.
pub async fn purchase_product<G, S>(
    gateway: &G,
    status: &S,
    product_id: u64,
    price: u128,
) -> Option<u64>
where
    G: MarketplaceGateway,
    S: StatusSink,
{
    if !gateway.is_ready() {
        status.set_error("Failed to purchase this product");
        return None;
    }

    let outcome = run_purchase(gateway, status, product_id, price).await;
    status.clear_loading();

    match outcome {
        Ok(count) => {
            status.set_success("Product purchased successfully");
            count
        }
        Err(e) => {
            status.set_error(&e.user_message());
            None
        }
    }
}

async fn run_purchase<G, S>(
    gateway: &G,
    status: &S,
    product_id: u64,
    price: u128,
) -> Result<Option<u64>, GatewayError>
where
    G: MarketplaceGateway,
    S: StatusSink,
{
    // The allowance must be confirmed before the purchase is issued;
    // buyProduct pulls the payment out of it.
    status.set_loading("Approving...");
    gateway.approve_payment(price).await?;

    status.set_loading("Purchasing...");
    gateway.buy_product(product_id).await?;

    // Rebuild from the count as it is now, not as it was captured
    // before the purchase started.
    Ok(gateway.products_length().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{GatewayCall, MockGateway, RecordingSink};
    use futures::executor::block_on;

    #[test]
    fn successful_purchase_reports_count_and_success() {
        let gateway = MockGateway::ready(7);
        let status = RecordingSink::default();

        let count = block_on(purchase_product(&gateway, &status, 2, 500));

        assert_eq!(count, Some(7));
        assert_eq!(
            gateway.calls(),
            vec![
                GatewayCall::Approve(500),
                GatewayCall::Buy(2),
                GatewayCall::Length,
            ]
        );
        assert_eq!(
            status.loading_history(),
            vec!["Approving...", "Purchasing..."]
        );
        assert!(status.loading_cleared());
        assert_eq!(status.success(), Some("Product purchased successfully".into()));
        assert_eq!(status.error(), None);
    }

    #[test]
    fn approve_rejection_never_reaches_purchase() {
        let gateway = MockGateway::ready(7)
            .with_approve_error(GatewayError::Rpc("user rejected transaction".into()));
        let status = RecordingSink::default();

        let count = block_on(purchase_product(&gateway, &status, 2, 500));

        assert_eq!(count, None);
        assert_eq!(gateway.calls(), vec![GatewayCall::Approve(500)]);
        assert_eq!(status.error(), Some("user rejected transaction".into()));
        assert_eq!(status.success(), None);
        assert!(status.loading_cleared());
    }

    #[test]
    fn purchase_revert_after_approval_reports_error() {
        // The allowance was already granted at this point; the flow
        // must still end in a clean error state.
        let gateway = MockGateway::ready(7)
            .with_buy_error(GatewayError::Reverted("Not enough products in stock".into()));
        let status = RecordingSink::default();

        let count = block_on(purchase_product(&gateway, &status, 2, 500));

        assert_eq!(count, None);
        assert_eq!(
            gateway.calls(),
            vec![GatewayCall::Approve(500), GatewayCall::Buy(2)]
        );
        assert_eq!(status.error(), Some("Not enough products in stock".into()));
        assert_eq!(status.success(), None);
        assert!(status.loading_cleared());
    }

    #[test]
    fn unready_wallet_fails_fast() {
        let gateway = MockGateway::ready(7).offline();
        let status = RecordingSink::default();

        let count = block_on(purchase_product(&gateway, &status, 2, 500));

        assert_eq!(count, None);
        assert!(gateway.calls().is_empty());
        assert_eq!(status.error(), Some("Failed to purchase this product".into()));
    }

    #[test]
    fn unknown_count_after_purchase_still_succeeds() {
        let gateway = MockGateway::ready(7).with_unknown_length();
        let status = RecordingSink::default();

        let count = block_on(purchase_product(&gateway, &status, 2, 500));

        assert_eq!(count, None);
        assert_eq!(status.success(), Some("Product purchased successfully".into()));
        assert!(status.loading_cleared());
    }
}
