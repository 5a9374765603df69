//! Chain-call error type and JS error decoding.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Fallback shown when a rejected call carries no usable message.
pub const FALLBACK_ERROR: &str = "Something went wrong. Try again.";

/// A failed contract call, classified by what the provider gave us.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The contract reverted with a reason string.
    #[error("transaction reverted: {0}")]
    Reverted(String),

    /// Provider/RPC level failure or user rejection, with a message.
    #[error("{0}")]
    Rpc(String),

    /// Nothing usable could be extracted from the rejection.
    #[error("unknown chain error")]
    Unknown,
}

impl GatewayError {
    /// The message surfaced to the user: revert reason first, then the
    /// provider message, then a fixed fallback.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Reverted(reason) if !reason.is_empty() => reason.clone(),
            GatewayError::Rpc(message) if !message.is_empty() => message.clone(),
            _ => FALLBACK_ERROR.to_string(),
        }
    }
}

impl From<JsValue> for GatewayError {
    /// Decode an ethers.js rejection. Revert errors carry a `reason`
    /// property, most other failures a `message`; plain thrown strings
    /// are used as-is.
    fn from(value: JsValue) -> Self {
        if let Some(reason) = string_property(&value, "reason") {
            return GatewayError::Reverted(reason);
        }
        if let Some(message) = string_property(&value, "message") {
            return GatewayError::Rpc(message);
        }
        if let Some(text) = value.as_string() {
            if !text.is_empty() {
                return GatewayError::Rpc(text);
            }
        }
        GatewayError::Unknown
    }
}

fn string_property(value: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
}
