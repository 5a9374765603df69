//! Marketplace and ERC20 contract access via ethers.js.
//!
//! The host page loads the ethers.js UMD bundle (`window.ethers`); this
//! module bridges it into Rust the same way the wallet bindings bridge
//! `window.ethereum`. Reads go through a plain provider, writes through
//! the wallet signer with an awaited confirmation count.

use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

use async_trait::async_trait;
use shared::dto::{NewListing, Product};

use super::error::GatewayError;
use super::gateway::MarketplaceGateway;
use super::wallet;
use crate::utils::constants::{CUSD_TOKEN_ADDRESS, MARKETPLACE_ADDRESS};

#[wasm_bindgen(inline_js = "
const MARKETPLACE_ABI = [
    'function getProductsLength() view returns (uint256)',
    'function readProduct(uint256) view returns (address, string, string, string, string, uint256, uint256, uint256)',
    'function writeProduct(string, string, string, string, uint256, uint256)',
    'function buyProduct(uint256)',
];

const ERC20_ABI = [
    'function approve(address, uint256) returns (bool)',
    'function balanceOf(address) view returns (uint256)',
];

function getProvider() {
    if (typeof window.ethers === 'undefined') {
        throw new Error('ethers.js is not loaded');
    }
    if (!window.ethereum) {
        throw new Error('No wallet extension found');
    }
    return new window.ethers.providers.Web3Provider(window.ethereum);
}

function flatten(value) {
    if (Array.isArray(value)) {
        return value.map(flatten);
    }
    if (value === null || value === undefined) {
        return '';
    }
    return value.toString();
}

export async function marketplaceRead(address, functionName, argsJson) {
    const provider = getProvider();
    const contract = new window.ethers.Contract(address, MARKETPLACE_ABI, provider);
    if (typeof contract[functionName] !== 'function') {
        throw new Error('Unknown contract function: ' + functionName);
    }
    const args = JSON.parse(argsJson);
    const result = await contract[functionName](...args);
    return flatten(result);
}

export async function marketplaceWrite(address, functionName, argsJson, confirmations) {
    const provider = getProvider();
    const signer = provider.getSigner();
    const contract = new window.ethers.Contract(address, MARKETPLACE_ABI, signer);
    if (typeof contract[functionName] !== 'function') {
        throw new Error('Unknown contract function: ' + functionName);
    }
    const args = JSON.parse(argsJson);
    const tx = await contract[functionName](...args);
    const receipt = confirmations > 0 ? await tx.wait(confirmations) : await tx.wait();
    return receipt.transactionHash;
}

export async function erc20Approve(tokenAddress, spender, amount, confirmations) {
    const provider = getProvider();
    const signer = provider.getSigner();
    const token = new window.ethers.Contract(tokenAddress, ERC20_ABI, signer);
    const tx = await token.approve(spender, amount);
    const receipt = confirmations > 0 ? await tx.wait(confirmations) : await tx.wait();
    return receipt.transactionHash;
}

export async function erc20BalanceOf(tokenAddress, owner) {
    const provider = getProvider();
    const token = new window.ethers.Contract(tokenAddress, ERC20_ABI, provider);
    const balance = await token.balanceOf(owner);
    return balance.toString();
}
")]
extern "C" {
    /// Call a read-only marketplace function
    #[wasm_bindgen(catch, js_name = marketplaceRead)]
    pub async fn marketplace_read(
        address: &str,
        function_name: &str,
        args_json: &str,
    ) -> Result<JsValue, JsValue>;

    /// Send a state-changing marketplace transaction and await mining
    #[wasm_bindgen(catch, js_name = marketplaceWrite)]
    pub async fn marketplace_write(
        address: &str,
        function_name: &str,
        args_json: &str,
        confirmations: u32,
    ) -> Result<JsValue, JsValue>;

    /// Approve the spender on the payment token and await mining
    #[wasm_bindgen(catch, js_name = erc20Approve)]
    pub async fn erc20_approve(
        token_address: &str,
        spender: &str,
        amount: &str,
        confirmations: u32,
    ) -> Result<JsValue, JsValue>;

    /// Read an ERC20 balance
    #[wasm_bindgen(catch, js_name = erc20BalanceOf)]
    pub async fn erc20_balance_of(token_address: &str, owner: &str) -> Result<JsValue, JsValue>;
}

/// Read a marketplace contract function.
///
/// `None` means the value is not yet known (provider missing, node
/// unreachable, call failed); callers must not treat it as zero.
pub async fn contract_read(function: &str, args: &[Value]) -> Option<JsValue> {
    let args_json = serde_json::to_string(args).ok()?;
    match marketplace_read(MARKETPLACE_ADDRESS, function, &args_json).await {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("contract read {} failed: {:?}", function, e);
            None
        }
    }
}

/// Send a marketplace transaction, awaiting `confirmations` (0 = the
/// provider's default). Arguments are captured by value here; later
/// input changes cannot leak into an in-flight transaction.
pub async fn contract_write(
    function: &str,
    args: &[Value],
    confirmations: u32,
) -> Result<String, GatewayError> {
    let args_json =
        serde_json::to_string(args).map_err(|e| GatewayError::Rpc(e.to_string()))?;
    marketplace_write(MARKETPLACE_ADDRESS, function, &args_json, confirmations)
        .await
        .map(|hash| hash.as_string().unwrap_or_default())
        .map_err(GatewayError::from)
}

/// The browser-backed gateway used by every component.
pub struct ChainGateway;

#[async_trait(?Send)]
impl MarketplaceGateway for ChainGateway {
    fn is_ready(&self) -> bool {
        wallet::connected_address().is_some()
    }

    async fn products_length(&self) -> Option<u64> {
        let value = contract_read("getProductsLength", &[]).await?;
        let text: String = serde_wasm_bindgen::from_value(value).ok()?;
        text.parse().ok()
    }

    async fn read_product(&self, id: u64) -> Option<Product> {
        let value = contract_read("readProduct", &[json!(id)]).await?;
        let fields: Vec<String> = serde_wasm_bindgen::from_value(value).ok()?;
        match Product::from_fields(&fields) {
            Ok(product) => Some(product),
            Err(e) => {
                log::warn!("product {} decode failed: {}", id, e);
                None
            }
        }
    }

    async fn approve_payment(&self, amount: u128) -> Result<(), GatewayError> {
        erc20_approve(
            CUSD_TOKEN_ADDRESS,
            MARKETPLACE_ADDRESS,
            &amount.to_string(),
            1,
        )
        .await
        .map(|_| ())
        .map_err(GatewayError::from)
    }

    async fn buy_product(&self, id: u64) -> Result<(), GatewayError> {
        contract_write("buyProduct", &[json!(id)], 0).await.map(|_| ())
    }

    async fn write_product(&self, listing: &NewListing) -> Result<(), GatewayError> {
        // u128 exceeds the safe JS integer range, so the price crosses
        // the boundary as a decimal string.
        let args = [
            json!(listing.name),
            json!(listing.image),
            json!(listing.description),
            json!(listing.location),
            json!(listing.price_wei.to_string()),
            json!(listing.available_products),
        ];
        contract_write("writeProduct", &args, 0).await.map(|_| ())
    }

    async fn token_balance(&self, owner: &str) -> Option<u128> {
        match erc20_balance_of(CUSD_TOKEN_ADDRESS, owner).await {
            Ok(value) => value.as_string()?.parse().ok(),
            Err(e) => {
                log::warn!("balance read failed: {:?}", e);
                None
            }
        }
    }
}
