//! Product read projection and listing write payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fields in the `readProduct` return tuple.
const PRODUCT_FIELD_COUNT: usize = 8;

/// A product as read from the marketplace contract.
///
/// This is a read-only projection of on-chain state: the client never
/// owns it, it is re-fetched whenever the product list is rebuilt.
/// `price` is kept in the token's smallest unit and only converted for
/// display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub owner: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    /// Price in the smallest token unit (wei for an 18-decimal token).
    pub price: u128,
    /// Units sold so far.
    pub sold: u64,
    /// Remaining stock. Purchases are only permitted while this is
    /// greater than zero.
    pub available_products: u64,
}

impl Product {
    /// Decode a product from the contract's positional return tuple:
    /// `(owner, name, image, description, location, price, sold,
    /// availableProducts)`, every field already stringified.
    pub fn from_fields(fields: &[String]) -> Result<Self, ProductParseError> {
        if fields.len() != PRODUCT_FIELD_COUNT {
            return Err(ProductParseError::FieldCount {
                expected: PRODUCT_FIELD_COUNT,
                got: fields.len(),
            });
        }

        Ok(Product {
            owner: fields[0].clone(),
            name: fields[1].clone(),
            image: fields[2].clone(),
            description: fields[3].clone(),
            location: fields[4].clone(),
            price: parse_numeric_field("price", &fields[5])?,
            sold: parse_numeric_field("sold", &fields[6])?,
            available_products: parse_numeric_field("availableProducts", &fields[7])?,
        })
    }

    pub fn is_sold_out(&self) -> bool {
        self.available_products == 0
    }
}

fn parse_numeric_field<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, ProductParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ProductParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// A new listing to be written to the marketplace contract via
/// `writeProduct`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListing {
    pub name: String,
    pub image: String,
    pub description: String,
    pub location: String,
    /// Price already converted to the smallest token unit.
    pub price_wei: u128,
    pub available_products: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductParseError {
    #[error("expected {expected} product fields, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("product field `{field}` is not a number: `{value}`")]
    InvalidNumber { field: &'static str, value: String },
}
