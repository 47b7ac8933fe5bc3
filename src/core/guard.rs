//! Ownership checks
//!
//! Every entry point that receives a caller and a resource identifier loads
//! the resource and passes its owner through an [`OwnershipGuard`] before
//! returning or mutating anything.

use crate::core::entity::{ResourceKind, UserId};
use crate::core::error::FreelasError;

/// Decides whether a caller may touch a resource
pub trait OwnershipGuard: Send + Sync {
    /// Fails with [`FreelasError::ResourceNotFound`] when `caller` may not
    /// access a `resource` owned by `owner`.
    ///
    /// The error is indistinguishable from the one produced for a resource
    /// that does not exist at all.
    fn authorize(
        &self,
        caller: UserId,
        owner: UserId,
        resource: ResourceKind,
    ) -> Result<(), FreelasError>;
}

/// Only the owning user may access a resource
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOnlyGuard;

impl OwnershipGuard for OwnerOnlyGuard {
    fn authorize(
        &self,
        caller: UserId,
        owner: UserId,
        resource: ResourceKind,
    ) -> Result<(), FreelasError> {
        if caller == owner {
            return Ok(());
        }

        tracing::debug!(caller = %caller, %resource, "ownership check denied");
        Err(FreelasError::not_found(resource))
    }
}
