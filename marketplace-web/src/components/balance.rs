//! Connected wallet's cUSD balance tag.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::contract::ChainGateway;
use crate::services::gateway::MarketplaceGateway;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::TOKEN_DECIMALS;
use shared::units::display_amount;

#[component]
pub fn Balance() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let (balance, set_balance) = signal(None::<u128>);

    // Refetch whenever the connected address changes; hide while
    // disconnected or unknown.
    Effect::new(move |_| {
        match wallet_ctx.address() {
            Some(address) => {
                spawn_local(async move {
                    set_balance.set(ChainGateway.token_balance(&address).await);
                });
            }
            None => set_balance.set(None),
        }
    });

    view! {
        {move || {
            balance.get().map(|raw| {
                view! {
                    <div class="balance">
                        "Balance: "
                        <span class="balance-tag">
                            {display_amount(raw, TOKEN_DECIMALS, 2)} " cUSD"
                        </span>
                    </div>
                }
            })
        }}
    }
}
