//! Typed error handling for freelas
//!
//! Every service operation returns [`FreelasError`], so callers pattern-match
//! on the error kind instead of inspecting messages.
//!
//! # Error Categories
//!
//! - [`FreelasError::InvalidIdentifier`]: an opaque id did not decode
//! - [`FreelasError::ResourceNotFound`]: absent, or owned by someone else
//! - [`FreelasError::CustomerNotFound`]: the customer referenced by a new project
//! - [`ValidationFailure`]: request-shape problems, reported all at once
//! - [`ScheduleError`]: inputs the installment scheduler cannot honour
//! - [`CodecError`]: identifier codec configuration or encoding failures
//! - [`StorageError`]: failures reported by a repository
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get_by_id(caller, "bad-id").await {
//!     Ok(view) => println!("Found: {}", view.name),
//!     Err(FreelasError::InvalidIdentifier { value, .. }) => println!("{value} is not an id"),
//!     Err(FreelasError::ResourceNotFound { .. }) => println!("no such project"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

use crate::core::entity::ResourceKind;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The main error type for freelas services
#[derive(Debug, Error)]
pub enum FreelasError {
    /// A supplied opaque identifier does not decode
    #[error("invalid {resource} identifier '{value}'")]
    InvalidIdentifier { resource: ResourceKind, value: String },

    /// The resource does not exist or belongs to another user
    ///
    /// Both cases are reported identically so that the existence of other
    /// users' data is never revealed.
    #[error("{resource} not found")]
    ResourceNotFound { resource: ResourceKind },

    /// The customer referenced while registering a project is not the caller's
    #[error("customer not found")]
    CustomerNotFound,

    /// Request-shape validation failed
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Installment schedule generation failed
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Identifier codec failure
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Repository failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FreelasError {
    /// Shorthand for [`FreelasError::ResourceNotFound`]
    pub fn not_found(resource: ResourceKind) -> Self {
        FreelasError::ResourceNotFound { resource }
    }

    /// Get the stable error code for this error
    ///
    /// The outer layer maps these codes to its own protocol responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            FreelasError::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            FreelasError::ResourceNotFound { .. } => "RESOURCE_NOT_FOUND",
            FreelasError::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            FreelasError::Validation(_) => "VALIDATION_FAILED",
            FreelasError::Schedule(_) => "SCHEDULE_ERROR",
            FreelasError::Codec(_) => "CODEC_ERROR",
            FreelasError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FreelasError::Codec(_) | FreelasError::Storage(_))
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Aggregated list of field errors produced by request validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub errors: Vec<FieldValidationError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<FieldValidationError>) -> Self {
        Self { errors }
    }

    /// Add an error, keeping the list ordered by field name
    pub fn push(&mut self, error: impl Into<FieldValidationError>) {
        let error = error.into();
        let at = self.errors.partition_point(|e| e.field <= error.field);
        self.errors.insert(at, error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the offending fields, in reporting order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// `Ok(())` when no error was collected
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "Validation errors: {}", msgs.join(", "))
    }
}

impl std::error::Error for ValidationFailure {}

// =============================================================================
// Schedule Errors
// =============================================================================

/// Inputs the installment scheduler refuses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("price must be greater than zero (got {price})")]
    NonPositivePrice { price: Decimal },

    #[error("price must have at most {scale} decimal places (got {price})")]
    PriceTooPrecise { price: Decimal, scale: u32 },

    #[error("installment count must be greater than zero")]
    NoInstallments,

    #[error("installment count must be at most {max} (got {count})")]
    TooManyInstallments { count: u32, max: u32 },

    /// `price / count` truncates to zero at the configured scale
    #[error("price {price} cannot be split into {count} non-zero installments")]
    InstallmentBelowMinimum { price: Decimal, count: u32 },

    #[error("installment {index} falls outside the supported date range")]
    DateOutOfRange { index: u32 },
}

impl ScheduleError {
    /// Name of the request field the error is about
    pub fn field(&self) -> &'static str {
        match self {
            ScheduleError::NonPositivePrice { .. }
            | ScheduleError::PriceTooPrecise { .. }
            | ScheduleError::InstallmentBelowMinimum { .. } => "price",
            ScheduleError::NoInstallments | ScheduleError::TooManyInstallments { .. } => {
                "payment_installment_count"
            }
            ScheduleError::DateOutOfRange { .. } => "start_payment_date",
        }
    }
}

impl From<ScheduleError> for FieldValidationError {
    fn from(err: ScheduleError) -> Self {
        FieldValidationError::new(err.field(), err.to_string())
    }
}

// =============================================================================
// Codec Errors
// =============================================================================

/// Errors related to the identifier codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The configured alphabet or length was rejected
    #[error("invalid identifier codec configuration: {message}")]
    Configuration { message: String },

    /// Encoding a key failed
    #[error("failed to encode identifier {id}: {message}")]
    Encode { id: u64, message: String },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to repositories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// A lock guarding shared state was poisoned
    #[error("storage lock poisoned: {message}")]
    LockPoisoned { message: String },

    /// A write targeted a record that does not exist
    #[error("{resource} with id '{id}' does not exist")]
    Missing { resource: ResourceKind, id: u64 },

    /// A write would break referential integrity
    #[error("integrity error: {message}")]
    IntegrityError { message: String },
}
