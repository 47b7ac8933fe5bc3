//! In-memory implementation of ProjectRepository for testing and development

use crate::core::entity::{
    Customer, CustomerId, Freela, FreelaId, Installment, InstallmentId, NewCustomer, NewFreela,
    ResourceKind, UserId,
};
use crate::core::error::StorageError;
use crate::core::repository::ProjectRepository;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A project row without its installments, as stored
#[derive(Debug, Clone)]
struct FreelaRow {
    name: String,
    price: Decimal,
    payment_installment_count: u32,
    start_payment_date: NaiveDate,
    owner_id: UserId,
    customer_id: CustomerId,
}

#[derive(Debug, Default)]
struct Tables {
    customers: BTreeMap<CustomerId, Customer>,
    freelas: BTreeMap<FreelaId, FreelaRow>,
    /// Installments of each project, in schedule order
    installments: BTreeMap<FreelaId, Vec<Installment>>,
    last_customer_id: u64,
    last_freela_id: u64,
    last_installment_id: u64,
}

impl Tables {
    fn assemble(&self, id: FreelaId, row: &FreelaRow) -> Freela {
        let installments = self.installments.get(&id).cloned().unwrap_or_default();

        Freela {
            id,
            name: row.name.clone(),
            price: row.price,
            payment_installment_count: row.payment_installment_count,
            start_payment_date: row.start_payment_date,
            owner_id: row.owner_id,
            customer_id: row.customer_id,
            installments,
        }
    }

    fn remove_freela(&mut self, id: FreelaId) {
        self.freelas.remove(&id);
        self.installments.remove(&id);
    }
}

/// In-memory project repository
///
/// Useful for testing and development. Keys are assigned sequentially from 1,
/// like a database identity column. Uses RwLock for thread-safe access; the
/// lock is never held across an await point.
#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryProjectRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StorageError> {
        self.tables.read().map_err(|e| StorageError::LockPoisoned {
            message: e.to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StorageError> {
        self.tables.write().map_err(|e| StorageError::LockPoisoned {
            message: e.to_string(),
        })
    }

    /// Number of stored installments, across all projects
    pub fn installment_count(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.installments.values().map(Vec::len).sum())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, StorageError> {
        let mut tables = self.write()?;

        tables.last_customer_id += 1;
        let customer = Customer {
            id: CustomerId::new(tables.last_customer_id),
            name: customer.name,
            owner_id: customer.owner_id,
        };
        tables.customers.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>, StorageError> {
        Ok(self.read()?.customers.get(&id).cloned())
    }

    async fn list_customers(&self, owner: UserId) -> Result<Vec<Customer>, StorageError> {
        Ok(self
            .read()?
            .customers
            .values()
            .filter(|c| c.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn update_customer(&self, customer: &Customer) -> Result<(), StorageError> {
        let mut tables = self.write()?;

        let stored = tables
            .customers
            .get_mut(&customer.id)
            .ok_or(StorageError::Missing {
                resource: ResourceKind::Customer,
                id: customer.id.as_u64(),
            })?;
        stored.name = customer.name.clone();

        Ok(())
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<(), StorageError> {
        let mut tables = self.write()?;

        let owned: Vec<FreelaId> = tables
            .freelas
            .iter()
            .filter(|(_, row)| row.customer_id == id)
            .map(|(freela_id, _)| *freela_id)
            .collect();
        for freela_id in owned {
            tables.remove_freela(freela_id);
        }
        tables.customers.remove(&id);

        Ok(())
    }

    async fn insert_freela(&self, freela: NewFreela) -> Result<Freela, StorageError> {
        let mut tables = self.write()?;

        if !tables.customers.contains_key(&freela.customer_id) {
            return Err(StorageError::IntegrityError {
                message: format!("customer {} does not exist", freela.customer_id),
            });
        }

        tables.last_freela_id += 1;
        let id = FreelaId::new(tables.last_freela_id);

        let mut installments: Vec<Installment> = freela
            .installments
            .iter()
            .map(|scheduled| {
                tables.last_installment_id += 1;
                Installment {
                    id: InstallmentId::new(tables.last_installment_id),
                    freela_id: id,
                    month: scheduled.month,
                    value: scheduled.value,
                }
            })
            .collect();
        installments.sort_by_key(|i| (i.month, i.id));
        tables.installments.insert(id, installments);

        let row = FreelaRow {
            name: freela.name,
            price: freela.price,
            payment_installment_count: freela.payment_installment_count,
            start_payment_date: freela.start_payment_date,
            owner_id: freela.owner_id,
            customer_id: freela.customer_id,
        };
        let created = tables.assemble(id, &row);
        tables.freelas.insert(id, row);

        Ok(created)
    }

    async fn find_freela(&self, id: FreelaId) -> Result<Option<Freela>, StorageError> {
        let tables = self.read()?;
        Ok(tables.freelas.get(&id).map(|row| tables.assemble(id, row)))
    }

    async fn list_freelas(&self, owner: UserId) -> Result<Vec<Freela>, StorageError> {
        let tables = self.read()?;
        Ok(tables
            .freelas
            .iter()
            .filter(|(_, row)| row.owner_id == owner)
            .map(|(id, row)| tables.assemble(*id, row))
            .collect())
    }

    async fn update_freela(&self, freela: &Freela) -> Result<(), StorageError> {
        let mut tables = self.write()?;

        let row = tables.freelas.get_mut(&freela.id).ok_or(StorageError::Missing {
            resource: ResourceKind::Freela,
            id: freela.id.as_u64(),
        })?;
        row.name = freela.name.clone();
        row.price = freela.price;
        row.payment_installment_count = freela.payment_installment_count;
        row.start_payment_date = freela.start_payment_date;

        Ok(())
    }

    async fn delete_freela(&self, id: FreelaId) -> Result<(), StorageError> {
        self.write()?.remove_freela(id);
        Ok(())
    }
}
