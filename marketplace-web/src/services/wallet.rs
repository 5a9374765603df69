//! Injected EVM Provider Integration via wasm-bindgen
//!
//! JavaScript interop for the page-injected wallet provider
//! (`window.ethereum`): MetaMask, Valora via WalletConnect bridges, or
//! any other EIP-1193 extension.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window.ethereum !== 'undefined';
}

export async function requestAccounts() {
    if (!window.ethereum) {
        throw new Error('No wallet extension found. Please install MetaMask or another Celo-compatible wallet.');
    }
    const accounts = await window.ethereum.request({ method: 'eth_requestAccounts' });
    if (!accounts || accounts.length === 0) {
        throw new Error('Wallet returned no accounts');
    }
    return accounts[0];
}

export function selectedAccount() {
    if (window.ethereum && window.ethereum.selectedAddress) {
        return window.ethereum.selectedAddress;
    }
    return null;
}
")]
extern "C" {
    /// Check whether an EIP-1193 provider is injected
    #[wasm_bindgen(js_name = hasEthereumProvider)]
    pub fn has_ethereum_provider() -> bool;

    /// Prompt the wallet for account access
    #[wasm_bindgen(catch, js_name = requestAccounts)]
    pub async fn request_accounts() -> Result<JsValue, JsValue>;

    /// Currently selected account, if the wallet already granted access
    #[wasm_bindgen(js_name = selectedAccount)]
    pub fn selected_account() -> Option<String>;
}

/// Wallet connection state
#[derive(Clone, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }
}

/// Check if a wallet extension is installed
pub fn is_wallet_installed() -> bool {
    has_ethereum_provider()
}

/// Address of the already-authorized account, if any
pub fn connected_address() -> Option<String> {
    selected_account()
}

/// Prompt the wallet to connect and return the selected address
pub async fn connect() -> Result<String, String> {
    match request_accounts().await {
        Ok(value) => value
            .as_string()
            .ok_or_else(|| "Wallet returned a non-string account".to_string()),
        Err(e) => {
            let message = if let Some(text) = e.as_string() {
                text
            } else if let Ok(msg) = js_sys::Reflect::get(&e, &JsValue::from_str("message")) {
                msg.as_string()
                    .unwrap_or_else(|| format!("Connection error: {:?}", e))
            } else {
                format!("Connection error: {:?}", e)
            };
            Err(message)
        }
    }
}
