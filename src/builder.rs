//! FreelasBuilder for wiring services from configuration

use crate::config::FreelasConfig;
use crate::context::ServiceContext;
use crate::core::codec::{IdentifierCodec, SqidsCodec};
use crate::core::guard::{OwnerOnlyGuard, OwnershipGuard};
use crate::core::repository::ProjectRepository;
use crate::core::schedule::InstallmentScheduler;
use crate::customers::CustomerService;
use crate::projects::ProjectService;
use anyhow::{Result, anyhow};
use std::sync::Arc;

/// The wired services
#[derive(Clone)]
pub struct Freelas {
    pub customers: CustomerService,
    pub projects: ProjectService,
}

/// Builder for [`Freelas`]
///
/// Only the repository is required. The codec defaults to a [`SqidsCodec`]
/// built from the configuration and the guard to [`OwnerOnlyGuard`].
///
/// # Example
///
/// ```ignore
/// let freelas = FreelasBuilder::new()
///     .with_config(FreelasConfig::from_yaml_file("freelas.yaml")?)
///     .with_repository(InMemoryProjectRepository::new())
///     .build()?;
/// ```
#[derive(Default)]
pub struct FreelasBuilder {
    config: FreelasConfig,
    repository: Option<Arc<dyn ProjectRepository>>,
    codec: Option<Arc<dyn IdentifierCodec>>,
    guard: Option<Arc<dyn OwnershipGuard>>,
}

impl FreelasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FreelasConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the repository (required)
    pub fn with_repository(self, repository: impl ProjectRepository + 'static) -> Self {
        self.with_shared_repository(Arc::new(repository))
    }

    /// Set a repository that is also used elsewhere
    pub fn with_shared_repository(mut self, repository: Arc<dyn ProjectRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replace the configured identifier codec
    pub fn with_codec(mut self, codec: impl IdentifierCodec + 'static) -> Self {
        self.codec = Some(Arc::new(codec));
        self
    }

    /// Replace the ownership guard
    pub fn with_guard(mut self, guard: impl OwnershipGuard + 'static) -> Self {
        self.guard = Some(Arc::new(guard));
        self
    }

    pub fn build(self) -> Result<Freelas> {
        self.config.validate()?;

        let repository = self
            .repository
            .ok_or_else(|| anyhow!("A repository is required"))?;
        let codec = match self.codec {
            Some(codec) => codec,
            None => Arc::new(SqidsCodec::from_config(&self.config.codec)?),
        };
        let guard = self.guard.unwrap_or_else(|| Arc::new(OwnerOnlyGuard));

        let context = ServiceContext::new(repository, codec, guard, self.config.pagination);
        let scheduler = InstallmentScheduler::new(self.config.schedule.scale)
            .with_max_installments(self.config.schedule.max_installments);

        Ok(Freelas {
            customers: CustomerService::new(context.clone()),
            projects: ProjectService::new(context, scheduler),
        })
    }
}
