//! Application constants

/// Marketplace contract (Celo Alfajores testnet)
pub const MARKETPLACE_ADDRESS: &str = "0x6b7439E3d2cAa5c4bA1b6e3a0F1a86e231F9f5b4";

/// cUSD payment token (Celo Alfajores testnet)
pub const CUSD_TOKEN_ADDRESS: &str = "0x874069Fa1Eb16D44d622F2e0Ca25eeA172369bC1";

/// Decimal places of the payment token
pub const TOKEN_DECIMALS: u32 = 18;

/// Block explorer base URL for address links
pub const EXPLORER_ADDRESS_BASE: &str = "https://explorer.celo.org/alfajores/address/";

// UI constants
pub const FIELD_DEBOUNCE_MS: u32 = 500;
pub const PRODUCTS_POLL_INTERVAL_MS: u32 = 15_000;
