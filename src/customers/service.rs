//! Customer management

use crate::context::ServiceContext;
use crate::core::entity::{Customer, CustomerId, NewCustomer, ResourceKind, UserId};
use crate::core::error::FreelasError;
use crate::core::query::{NameFilter, Page, Pagination, by_name};
use crate::core::validation::validate_request;
use crate::customers::requests::{RegisterCustomerRequest, UpdateCustomerRequest};
use crate::customers::views::{CustomerView, customer_view};

/// Owner-scoped operations on customers
#[derive(Clone)]
pub struct CustomerService {
    context: ServiceContext,
}

impl CustomerService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    /// Record a customer owned by the caller
    pub async fn register(
        &self,
        caller: UserId,
        request: RegisterCustomerRequest,
    ) -> Result<CustomerView, FreelasError> {
        validate_request(&request)?;

        let customer = self
            .context
            .repository
            .insert_customer(NewCustomer {
                name: request.name.trim().to_string(),
                owner_id: caller,
            })
            .await?;

        tracing::info!(caller = %caller, customer_id = %customer.id, "registered customer");
        Ok(customer_view(self.context.codec.as_ref(), &customer)?)
    }

    pub async fn get_by_id(&self, caller: UserId, id: &str) -> Result<CustomerView, FreelasError> {
        let customer = self.load_owned(caller, id).await?;
        Ok(customer_view(self.context.codec.as_ref(), &customer)?)
    }

    /// List the caller's customers, filtered, sorted by name, then paginated
    pub async fn list_all(
        &self,
        caller: UserId,
        filter: &NameFilter,
        pagination: Pagination,
    ) -> Result<Page<CustomerView>, FreelasError> {
        let (page, page_size) = pagination.normalize(&self.context.pagination);

        let customers = self.context.repository.list_customers(caller).await?;
        let mut customers = filter.apply(customers, |c| c.name.as_str());
        customers.sort_by(|a, b| by_name((a.name.as_str(), a.id), (b.name.as_str(), b.id)));

        let codec = self.context.codec.as_ref();
        Ok(Page::slice(customers, page, page_size).try_map(|c| customer_view(codec, &c))?)
    }

    pub async fn update(
        &self,
        caller: UserId,
        id: &str,
        request: UpdateCustomerRequest,
    ) -> Result<(), FreelasError> {
        validate_request(&request)?;

        let mut customer = self.load_owned(caller, id).await?;
        if let Some(name) = request.name {
            customer.name = name.trim().to_string();
        }
        self.context.repository.update_customer(&customer).await?;

        tracing::info!(caller = %caller, customer_id = %customer.id, "updated customer");
        Ok(())
    }

    /// Delete one of the caller's customers, with all of its projects
    pub async fn delete(&self, caller: UserId, id: &str) -> Result<(), FreelasError> {
        let customer = self.load_owned(caller, id).await?;
        self.context.repository.delete_customer(customer.id).await?;

        tracing::info!(caller = %caller, customer_id = %customer.id, "deleted customer");
        Ok(())
    }

    async fn load_owned(&self, caller: UserId, id: &str) -> Result<Customer, FreelasError> {
        let id = CustomerId::new(self.context.decode(ResourceKind::Customer, id)?);

        let customer = self
            .context
            .repository
            .find_customer(id)
            .await?
            .ok_or(FreelasError::not_found(ResourceKind::Customer))?;
        self.context
            .authorize(caller, customer.owner_id, ResourceKind::Customer)?;

        Ok(customer)
    }
}
