//! Request validation
//!
//! Request types derive [`validator::Validate`]; [`validate_request`] runs the
//! declared rules and flattens every failure into a [`ValidationFailure`] so a
//! client can display all problems at once.

pub mod validators;

use crate::core::error::{FieldValidationError, ValidationFailure};
use validator::{Validate, ValidationErrors};

/// Run the declared rules of `request`
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ValidationFailure> {
    request.validate().map_err(|errors| flatten(&errors))
}

/// Convert `validator` errors into `(field, message)` pairs
///
/// Fields are reported in alphabetical order; messages of one field keep the
/// order in which the rules were declared.
pub fn flatten(errors: &ValidationErrors) -> ValidationFailure {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let errors = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldValidationError::new(field.clone(), message)
            })
        })
        .collect();

    ValidationFailure::new(errors)
}
