//! Core module containing the entities, traits and pure building blocks

pub mod codec;
pub mod entity;
pub mod error;
pub mod guard;
pub mod query;
pub mod repository;
pub mod schedule;
pub mod validation;

pub use codec::{IdentifierCodec, SqidsCodec};
pub use entity::{
    Customer, CustomerId, Freela, FreelaId, Installment, InstallmentId, NewCustomer, NewFreela,
    ResourceKind, ScheduledInstallment, UserId,
};
pub use error::{
    CodecError, FieldValidationError, FreelasError, ScheduleError, StorageError,
    ValidationFailure,
};
pub use guard::{OwnerOnlyGuard, OwnershipGuard};
pub use query::{NameFilter, Page, Pagination, PaginationMeta};
pub use repository::ProjectRepository;
pub use schedule::InstallmentScheduler;
