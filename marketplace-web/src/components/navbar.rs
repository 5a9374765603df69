//! Navigation bar with the wallet connect button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::services::wallet;
use crate::services::wallet::WalletState;
use crate::state::wallet::use_wallet_context;
use shared::utils::shorten_address;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let on_connect = move |_| {
        if wallet_ctx.is_connected() {
            wallet_ctx.disconnect();
            return;
        }
        wallet_ctx.set_connecting();
        spawn_local(async move {
            match wallet::connect().await {
                Ok(address) => wallet_ctx.set_connected(address),
                Err(e) => {
                    log::warn!("wallet connect failed: {}", e);
                    wallet_ctx.set_error(e);
                }
            }
        });
    };

    let button_label = move || match wallet_ctx.wallet.get() {
        WalletState::Connected { address } => shorten_address(&address),
        WalletState::Connecting => "Connecting...".to_string(),
        _ => "Connect Wallet".to_string(),
    };

    view! {
        <nav class="header">
            <span class="nav-title">"Celo Marketplace"</span>
            <button class="btn connect-btn" on:click=on_connect>
                {button_label}
            </button>
        </nav>
    }
}
