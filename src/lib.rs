//! # Freelas
//!
//! Owner-scoped management of freelance projects, their customers and their
//! payment installments.
//!
//! ## Features
//!
//! - **Opaque Identifiers**: storage keys never leave the crate, views carry
//!   sqids-encoded strings
//! - **Ownership Guard**: a foreign resource is reported exactly like an absent one
//! - **Installment Schedules**: exact decimal split of a price into monthly
//!   installments whose sum equals the price
//! - **Filtered Listings**: name filter, name ordering and pagination metadata
//! - **Pluggable Storage**: services depend on the `ProjectRepository` trait
//! - **Configuration-Based**: codec, pagination, schedule and logging via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use freelas::prelude::*;
//!
//! let freelas = FreelasBuilder::new()
//!     .with_config(FreelasConfig::from_yaml_file("freelas.yaml")?)
//!     .with_repository(InMemoryProjectRepository::new())
//!     .build()?;
//!
//! let owner = UserId::new(1);
//! let customer = freelas
//!     .customers
//!     .register(owner, RegisterCustomerRequest { name: "ACME".into() })
//!     .await?;
//!
//! let project = freelas
//!     .projects
//!     .register(
//!         owner,
//!         RegisterFreelaRequest {
//!             name: "Website".into(),
//!             price: Decimal::from(1200),
//!             payment_installment_count: 3,
//!             start_payment_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!             customer_id: customer.id,
//!         },
//!     )
//!     .await?;
//! assert_eq!(project.installments.len(), 3);
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod core;
pub mod customers;
pub mod projects;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        codec::{IdentifierCodec, SqidsCodec},
        entity::{
            Customer, CustomerId, Freela, FreelaId, Installment, InstallmentId, ResourceKind,
            ScheduledInstallment, UserId,
        },
        error::{FieldValidationError, FreelasError, ValidationFailure},
        guard::{OwnerOnlyGuard, OwnershipGuard},
        query::{NameFilter, Page, Pagination, PaginationMeta},
        repository::ProjectRepository,
        schedule::InstallmentScheduler,
    };

    // === Services ===
    pub use crate::builder::{Freelas, FreelasBuilder};
    pub use crate::context::ServiceContext;
    pub use crate::customers::{
        CustomerService, CustomerView, RegisterCustomerRequest, UpdateCustomerRequest,
    };
    pub use crate::projects::{
        FreelaSummaryView, FreelaView, InstallmentView, ProjectService, RegisterFreelaRequest,
        UpdateFreelaRequest,
    };

    // === Storage ===
    pub use crate::storage::InMemoryProjectRepository;

    // === Config ===
    pub use crate::config::FreelasConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use rust_decimal::Decimal;
}
