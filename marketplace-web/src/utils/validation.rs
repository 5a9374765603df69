//! Validation for the add-product form.
//!
//! Checks run field-by-field in form order and stop at the first
//! failure; each rule carries its own user-facing warning.

use url::Url;

use crate::services::listing::ProductDraft;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate product name
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().len() < 2 {
        return ValidationResult::err("Product name must be at least 2 characters");
    }
    ValidationResult::ok()
}

/// Validate product image URL
pub fn validate_image_url(image: &str) -> ValidationResult {
    if Url::parse(image.trim()).is_err() {
        return ValidationResult::err("Product image must be a valid URL");
    }
    ValidationResult::ok()
}

/// Validate product description
pub fn validate_description(description: &str) -> ValidationResult {
    if description.trim().split_whitespace().count() < 2 {
        return ValidationResult::err("Product description must be at least 2 words");
    }
    ValidationResult::ok()
}

/// Validate product location
pub fn validate_location(location: &str) -> ValidationResult {
    if location.trim().len() < 2 {
        return ValidationResult::err("Product location must be at least 2 characters");
    }
    ValidationResult::ok()
}

/// Validate product price (in display units, before wei conversion)
pub fn validate_price(price: &str) -> ValidationResult {
    let value: f64 = match price.trim().parse() {
        Ok(v) => v,
        Err(_) => return ValidationResult::err("Product price must be a number"),
    };
    if !value.is_finite() || value < 1.0 {
        return ValidationResult::err("Product price must be at least 1");
    }
    ValidationResult::ok()
}

/// Validate available stock
pub fn validate_available(available: &str) -> ValidationResult {
    let value: u64 = match available.trim().parse() {
        Ok(v) => v,
        Err(_) => return ValidationResult::err("Available stock must be a whole number"),
    };
    if value < 1 {
        return ValidationResult::err("Available stock must be at least 1");
    }
    ValidationResult::ok()
}

/// Validate a whole draft, short-circuiting on the first failing field.
pub fn validate_draft(draft: &ProductDraft) -> ValidationResult {
    let checks = [
        validate_name(&draft.name),
        validate_image_url(&draft.image),
        validate_description(&draft.description),
        validate_location(&draft.location),
        validate_price(&draft.price),
        validate_available(&draft.available_products),
    ];
    for check in checks {
        if !check.is_valid {
            return check;
        }
    }
    ValidationResult::ok()
}
