//! Display helpers shared across the frontend.

/// Shorten a 0x account address for display, keeping the `0x` prefix
/// plus the first and last four hex digits (`0x1234...5678`).
///
/// Addresses too short to shorten meaningfully are returned unchanged.
pub fn shorten_address(address: &str) -> String {
    let hex = address.strip_prefix("0x").unwrap_or(address);
    if hex.len() <= 8 || !hex.is_ascii() {
        return address.to_string();
    }
    format!("0x{}...{}", &hex[..4], &hex[hex.len() - 4..])
}
