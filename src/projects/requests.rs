//! Project request types

use crate::core::validation::validators;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Data needed to register a project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegisterFreelaRequest {
    #[validate(
        custom(function = "validators::not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub name: String,

    #[validate(custom(function = "validators::positive_decimal"))]
    pub price: Decimal,

    #[validate(range(min = 1, message = "must be at least 1"))]
    pub payment_installment_count: u32,

    pub start_payment_date: NaiveDate,

    /// Opaque identifier of one of the caller's customers
    ///
    /// Not validated here: anything that does not decode, blank included, is
    /// an invalid identifier.
    pub customer_id: String,
}

/// Sparse update of a project
///
/// Only the fields that are present are applied. Changing the price or the
/// installment count does not touch the existing installments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateFreelaRequest {
    #[validate(
        custom(function = "validators::not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub name: Option<String>,

    #[validate(custom(function = "validators::positive_decimal"))]
    pub price: Option<Decimal>,

    #[validate(range(min = 1, message = "must be at least 1"))]
    pub payment_installment_count: Option<u32>,

    pub start_payment_date: Option<NaiveDate>,
}

impl UpdateFreelaRequest {
    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.payment_installment_count.is_none()
            && self.start_payment_date.is_none()
    }
}
