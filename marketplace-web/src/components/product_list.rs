//! The product grid and its status banners.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alerts::{ErrorAlert, LoadingAlert, SuccessAlert};
use super::product_card::ProductCard;
use crate::services::contract::ChainGateway;
use crate::services::gateway::MarketplaceGateway;
use crate::state::products::use_products_context;
use crate::utils::constants::PRODUCTS_POLL_INTERVAL_MS;

#[component]
pub fn ProductList() -> impl IntoView {
    let store = use_products_context();

    // Poll the on-chain product count; every observed change rebuilds
    // the whole list. Transaction flows rebuild eagerly on their own,
    // this loop picks up listings created by other users.
    spawn_local(async move {
        let mut last_count = None;
        loop {
            if let Some(count) = ChainGateway.products_length().await {
                if last_count != Some(count) {
                    store.rebuild(count);
                    last_count = Some(count);
                }
            }
            TimeoutFuture::new(PRODUCTS_POLL_INTERVAL_MS).await;
        }
    });

    let on_clear = Callback::new(move |_| store.clear());

    view! {
        <div class="products">
            {move || {
                let message = store.error();
                (!message.is_empty())
                    .then(|| view! { <ErrorAlert message=message on_clear=on_clear/> })
            }}
            {move || {
                let message = store.success();
                (!message.is_empty()).then(|| view! { <SuccessAlert message=message/> })
            }}
            {move || {
                let message = store.loading();
                (!message.is_empty()).then(|| view! { <LoadingAlert message=message/> })
            }}
            <h1 class="products-title">"Products"</h1>
            <div class="product-grid">
                {move || {
                    store.entries().map(|ids| {
                        ids.into_iter()
                            .map(|id| view! { <ProductCard id=id/> })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}
