//! Reusable field validators
//!
//! These are plugged into `#[validate(custom(function = ...))]` attributes of
//! request types.

use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::ValidationError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Validator: text must contain something besides whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error("not_blank", "must not be blank"))
    } else {
        Ok(())
    }
}

/// Validator: decimal must be strictly greater than zero
pub fn positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        Ok(())
    } else {
        Err(error("positive", "must be greater than zero"))
    }
}
