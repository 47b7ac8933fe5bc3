//! Collaborators shared by every service

use crate::config::PaginationConfig;
use crate::core::codec::IdentifierCodec;
use crate::core::entity::{ResourceKind, UserId};
use crate::core::error::FreelasError;
use crate::core::guard::OwnershipGuard;
use crate::core::repository::ProjectRepository;
use std::sync::Arc;

/// Repository, codec, guard and listing limits, passed explicitly to services
#[derive(Clone)]
pub struct ServiceContext {
    pub repository: Arc<dyn ProjectRepository>,
    pub codec: Arc<dyn IdentifierCodec>,
    pub guard: Arc<dyn OwnershipGuard>,
    pub pagination: PaginationConfig,
}

impl ServiceContext {
    pub fn new(
        repository: Arc<dyn ProjectRepository>,
        codec: Arc<dyn IdentifierCodec>,
        guard: Arc<dyn OwnershipGuard>,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            repository,
            codec,
            guard,
            pagination,
        }
    }

    /// Decode an opaque identifier of `resource`
    pub fn decode(&self, resource: ResourceKind, value: &str) -> Result<u64, FreelasError> {
        self.codec
            .decode(value)
            .ok_or_else(|| FreelasError::InvalidIdentifier {
                resource,
                value: value.to_string(),
            })
    }

    /// Fail with `ResourceNotFound` unless `caller` owns the resource
    pub fn authorize(
        &self,
        caller: UserId,
        owner: UserId,
        resource: ResourceKind,
    ) -> Result<(), FreelasError> {
        self.guard.authorize(caller, owner, resource)
    }
}
