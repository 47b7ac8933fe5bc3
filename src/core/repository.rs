//! Repository trait for customers, projects and installments

use crate::core::entity::{
    Customer, CustomerId, Freela, FreelaId, NewCustomer, NewFreela, UserId,
};
use crate::core::error::StorageError;
use async_trait::async_trait;

/// Persistence of customers, projects and their installments
///
/// Lookups by id are not scoped: services pass the loaded record's owner
/// through an [`OwnershipGuard`](crate::core::guard::OwnershipGuard) before
/// using it. Listings are scoped to one owner.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Store a new customer and return it with its assigned id
    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, StorageError>;

    /// Get a customer by id
    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>, StorageError>;

    /// List the customers of `owner`, in no particular order
    async fn list_customers(&self, owner: UserId) -> Result<Vec<Customer>, StorageError>;

    /// Overwrite the stored fields of an existing customer
    async fn update_customer(&self, customer: &Customer) -> Result<(), StorageError>;

    /// Delete a customer together with its projects and their installments
    async fn delete_customer(&self, id: CustomerId) -> Result<(), StorageError>;

    /// Store a project and all of its installments in one write
    async fn insert_freela(&self, freela: NewFreela) -> Result<Freela, StorageError>;

    /// Get a project, installments included
    async fn find_freela(&self, id: FreelaId) -> Result<Option<Freela>, StorageError>;

    /// List the projects of `owner`, in no particular order
    async fn list_freelas(&self, owner: UserId) -> Result<Vec<Freela>, StorageError>;

    /// Overwrite the scalar fields of an existing project
    ///
    /// Installments are left as they are.
    async fn update_freela(&self, freela: &Freela) -> Result<(), StorageError>;

    /// Delete a project and its installments
    async fn delete_freela(&self, id: FreelaId) -> Result<(), StorageError>;
}
