//! New-listing validation and submission flow.

use shared::dto::NewListing;
use shared::units::parse_units;

use super::gateway::{MarketplaceGateway, StatusSink};
use crate::utils::constants::TOKEN_DECIMALS;
use crate::utils::validation::validate_draft;

/// The add-product form's draft, one string per input field.
///
/// Never persisted; the debounced copies of these fields are what the
/// submission captures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    /// Price in display units ("10" = 10 cUSD), converted to wei on
    /// submission.
    pub price: String,
    pub available_products: String,
}

/// Validate the draft and submit it as a `writeProduct` transaction.
///
/// Validation failures are reported synchronously and no chain call is
/// made. On success, returns the post-creation on-chain product count
/// for the caller to rebuild the store from.
pub async fn submit_listing<G, S>(gateway: &G, status: &S, draft: &ProductDraft) -> Option<u64>
where
    G: MarketplaceGateway,
    S: StatusSink,
{
    let check = validate_draft(draft);
    if let Some(warning) = check.error {
        status.set_error(&warning);
        return None;
    }

    if !gateway.is_ready() {
        status.set_error("Failed to create product");
        return None;
    }

    // Validation already vetted both numbers; these conversions can
    // still fail on oddities like excess decimal places.
    let price_wei = match parse_units(&draft.price, TOKEN_DECIMALS) {
        Ok(value) => value,
        Err(e) => {
            status.set_error(&e.to_string());
            return None;
        }
    };
    let available_products: u64 = match draft.available_products.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            status.set_error("Available stock must be a whole number");
            return None;
        }
    };

    let listing = NewListing {
        name: draft.name.clone(),
        image: draft.image.clone(),
        description: draft.description.clone(),
        location: draft.location.clone(),
        price_wei,
        available_products,
    };

    status.set_loading("Creating...");
    let result = gateway.write_product(&listing).await;
    status.clear_loading();

    match result {
        Ok(()) => {
            status.set_success("Product created successfully");
            gateway.products_length().await
        }
        Err(e) => {
            status.set_error(&e.user_message());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error::GatewayError;
    use crate::services::testing::{GatewayCall, MockGateway, RecordingSink};
    use futures::executor::block_on;

    fn chair_draft() -> ProductDraft {
        ProductDraft {
            name: "Chair".to_string(),
            image: "https://x.com/a.png".to_string(),
            description: "wooden chair".to_string(),
            location: "Lagos".to_string(),
            price: "10".to_string(),
            available_products: "5".to_string(),
        }
    }

    #[test]
    fn valid_draft_submits_exact_arguments() {
        let gateway = MockGateway::ready(4);
        let status = RecordingSink::default();

        let count = block_on(submit_listing(&gateway, &status, &chair_draft()));

        assert_eq!(count, Some(4));
        assert_eq!(
            gateway.calls(),
            vec![
                GatewayCall::Write(NewListing {
                    name: "Chair".to_string(),
                    image: "https://x.com/a.png".to_string(),
                    description: "wooden chair".to_string(),
                    location: "Lagos".to_string(),
                    price_wei: 10_000_000_000_000_000_000,
                    available_products: 5,
                }),
                GatewayCall::Length,
            ]
        );
        assert_eq!(status.success(), Some("Product created successfully".into()));
        assert!(status.loading_cleared());
    }

    #[test]
    fn invalid_draft_makes_no_chain_call() {
        let gateway = MockGateway::ready(4);
        let status = RecordingSink::default();
        let mut draft = chair_draft();
        draft.description = "short".to_string();

        let count = block_on(submit_listing(&gateway, &status, &draft));

        assert_eq!(count, None);
        assert!(gateway.calls().is_empty());
        assert_eq!(
            status.error(),
            Some("Product description must be at least 2 words".into())
        );
    }

    #[test]
    fn unready_wallet_fails_fast() {
        let gateway = MockGateway::ready(4).offline();
        let status = RecordingSink::default();

        let count = block_on(submit_listing(&gateway, &status, &chair_draft()));

        assert_eq!(count, None);
        assert!(gateway.calls().is_empty());
        assert_eq!(status.error(), Some("Failed to create product".into()));
    }

    #[test]
    fn write_rejection_reports_error() {
        let gateway = MockGateway::ready(4)
            .with_write_error(GatewayError::Rpc("user rejected transaction".into()));
        let status = RecordingSink::default();

        let count = block_on(submit_listing(&gateway, &status, &chair_draft()));

        assert_eq!(count, None);
        assert_eq!(status.error(), Some("user rejected transaction".into()));
        assert_eq!(status.success(), None);
        assert!(status.loading_cleared());
    }

    #[test]
    fn fractional_price_converts_to_wei() {
        let gateway = MockGateway::ready(2);
        let status = RecordingSink::default();
        let mut draft = chair_draft();
        draft.price = "1.5".to_string();

        block_on(submit_listing(&gateway, &status, &draft));

        match &gateway.calls()[0] {
            GatewayCall::Write(listing) => {
                assert_eq!(listing.price_wei, 1_500_000_000_000_000_000);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }
}
