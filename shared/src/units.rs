//! Fixed-point token-amount conversion.
//!
//! The marketplace prices everything in an 18-decimal ERC20 stablecoin,
//! so user-facing decimal strings have to be converted to the token's
//! smallest unit before they go on chain, and back again for display.
//! All arithmetic is integer `u128`; floats are only used for the
//! rounded balance display.

use thiserror::Error;

/// Largest decimal count `u128` can scale without overflowing.
const MAX_DECIMALS: u32 = 38;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid numeric amount: `{0}`")]
    InvalidAmount(String),

    #[error("amount has more than {0} decimal places")]
    PrecisionTooHigh(u32),

    #[error("amount exceeds the representable token range")]
    Overflow,
}

/// Convert a decimal amount string to the token's smallest unit.
///
/// `parse_units("10.5", 18)` is the analog of ethers'
/// `parseEther("10.5")`. Fractional digits beyond `decimals` are an
/// error, not a silent truncation.
pub fn parse_units(amount: &str, decimals: u32) -> Result<u128, UnitsError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(UnitsError::Empty);
    }
    if decimals > MAX_DECIMALS {
        return Err(UnitsError::PrecisionTooHigh(MAX_DECIMALS));
    }

    let (whole_part, frac_part) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };

    if frac_part.len() as u32 > decimals {
        return Err(UnitsError::PrecisionTooHigh(decimals));
    }

    let whole: u128 = if whole_part.is_empty() {
        0
    } else {
        parse_digits(whole_part, amount)?
    };

    let frac: u128 = if frac_part.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac_part, width = decimals as usize);
        parse_digits(&padded, amount)?
    };

    let scale = 10u128
        .checked_pow(decimals)
        .ok_or(UnitsError::Overflow)?;
    whole
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac))
        .ok_or(UnitsError::Overflow)
}

fn parse_digits(digits: &str, original: &str) -> Result<u128, UnitsError> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UnitsError::InvalidAmount(original.to_string()));
    }
    digits
        .parse()
        .map_err(|_| UnitsError::Overflow)
}

/// Convert a smallest-unit value back to a decimal string, trailing
/// zeros trimmed. The analog of ethers' `formatEther`, except whole
/// values render without a fractional part (`"10"`, not `"10.0"`).
pub fn format_units(value: u128, decimals: u32) -> String {
    let Some(scale) = 10u128.checked_pow(decimals) else {
        return value.to_string();
    };
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac_digits = format!("{:0>width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac_digits.trim_end_matches('0'))
}

/// Render a smallest-unit value rounded to `places` fractional digits,
/// matching the JS `Number(x).toFixed(places)` the balance tag uses.
pub fn display_amount(value: u128, decimals: u32, places: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    format!("{:.*}", places, value as f64 / scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEI: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn parses_whole_amounts() {
        assert_eq!(parse_units("10", 18), Ok(10 * WEI));
        assert_eq!(parse_units("1", 18), Ok(WEI));
        assert_eq!(parse_units("0", 18), Ok(0));
    }

    #[test]
    fn parses_fractional_amounts() {
        assert_eq!(parse_units("10.5", 18), Ok(10 * WEI + WEI / 2));
        assert_eq!(parse_units("0.000000000000000001", 18), Ok(1));
        assert_eq!(parse_units(".5", 18), Ok(WEI / 2));
    }

    #[test]
    fn rejects_bad_amounts() {
        assert_eq!(parse_units("", 18), Err(UnitsError::Empty));
        assert_eq!(parse_units("   ", 18), Err(UnitsError::Empty));
        assert!(matches!(
            parse_units("ten", 18),
            Err(UnitsError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_units("-1", 18),
            Err(UnitsError::InvalidAmount(_))
        ));
        assert_eq!(
            parse_units("0.0000000000000000001", 18),
            Err(UnitsError::PrecisionTooHigh(18))
        );
    }

    #[test]
    fn formats_units() {
        assert_eq!(format_units(10 * WEI, 18), "10");
        assert_eq!(format_units(10 * WEI + WEI / 2, 18), "10.5");
        assert_eq!(format_units(1, 18), "0.000000000000000001");
        assert_eq!(format_units(0, 18), "0");
    }

    #[test]
    fn round_trips_decimal_strings() {
        for amount in ["10", "10.5", "0.25", "123.456789"] {
            let wei = parse_units(amount, 18).unwrap();
            let back = format_units(wei, 18);
            assert_eq!(parse_units(&back, 18).unwrap(), wei);
            // Fractional inputs survive verbatim; ".25" style inputs
            // regain their leading zero.
            assert_eq!(back.trim_start_matches('0'), amount.trim_start_matches('0'));
        }
    }

    #[test]
    fn displays_rounded_balances() {
        assert_eq!(display_amount(10 * WEI + WEI / 2, 18, 2), "10.50");
        assert_eq!(display_amount(WEI / 3, 18, 2), "0.33");
        assert_eq!(display_amount(0, 18, 2), "0.00");
    }
}
