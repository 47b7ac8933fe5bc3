//! Customer request types

use crate::core::validation::validators;
use serde::Deserialize;
use validator::Validate;

/// Data needed to record a customer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegisterCustomerRequest {
    #[validate(
        custom(function = "validators::not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub name: String,
}

/// Sparse update of a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateCustomerRequest {
    #[validate(
        custom(function = "validators::not_blank"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub name: Option<String>,
}
