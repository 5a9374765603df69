//! A single product card with its purchase action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::contract::ChainGateway;
use crate::services::gateway::MarketplaceGateway;
use crate::services::purchase::purchase_product;
use crate::services::wallet;
use crate::state::products::use_products_context;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{EXPLORER_ADDRESS_BASE, TOKEN_DECIMALS};
use shared::dto::Product;
use shared::units::format_units;
use shared::utils::shorten_address;

#[component]
pub fn ProductCard(id: u64) -> impl IntoView {
    let store = use_products_context();
    let wallet_ctx = use_wallet_context();
    let (product, set_product) = signal(None::<Product>);

    // Fetch the on-chain record once per mount; the card renders
    // nothing until it arrives.
    spawn_local(async move {
        set_product.set(ChainGateway.read_product(id).await);
    });

    let on_buy = move |_| {
        let Some(current) = product.get_untracked() else {
            return;
        };

        // No wallet session: prompt a connect and abort the flow
        // without recording any status.
        if !wallet_ctx.is_connected() {
            wallet_ctx.set_connecting();
            spawn_local(async move {
                match wallet::connect().await {
                    Ok(address) => wallet_ctx.set_connected(address),
                    Err(e) => wallet_ctx.set_error(e),
                }
            });
            return;
        }

        let price = current.price;
        spawn_local(async move {
            if let Some(count) = purchase_product(&ChainGateway, &store, id, price).await {
                store.rebuild(count);
            }
        });
    };

    view! {
        {move || {
            product.get().map(|p| {
                let explorer_link = format!("{}{}", EXPLORER_ADDRESS_BASE, p.owner);
                let owner_label = shorten_address(&p.owner);
                let price_label = format!("Buy for {} cUSD", format_units(p.price, TOKEN_DECIMALS));
                let sold_out = p.is_sold_out();
                view! {
                    <div class="product-card">
                        <img class="product-image" src=p.image.clone() alt=p.name.clone()/>
                        <a class="product-owner" href=explorer_link target="_blank">
                            {owner_label}
                        </a>
                        <span class="tag tag-sold">{p.sold} " sold"</span>
                        <p class="product-name">{p.name.clone()}</p>
                        <p class="product-description">{p.description.clone()}</p>
                        <div class="product-stock">
                            "Stocks Available: "
                            <span class="tag">{p.available_products}</span>
                        </div>
                        <div class="product-location">{p.location.clone()}</div>
                        <button class="btn buy-btn" disabled=sold_out on:click=on_buy>
                            {if sold_out { "SOLD OUT".to_string() } else { price_label }}
                        </button>
                    </div>
                }
            })
        }}
    }
}
