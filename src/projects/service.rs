//! Project lifecycle orchestration

use crate::context::ServiceContext;
use crate::core::entity::{CustomerId, Freela, FreelaId, NewFreela, ResourceKind, UserId};
use crate::core::error::{FreelasError, ScheduleError, ValidationFailure};
use crate::core::query::{NameFilter, Page, Pagination, by_name};
use crate::core::schedule::InstallmentScheduler;
use crate::core::validation::validate_request;
use crate::projects::requests::{RegisterFreelaRequest, UpdateFreelaRequest};
use crate::projects::views::{FreelaSummaryView, FreelaView, freela_summary_view, freela_view};
use rust_decimal::Decimal;

/// Get, list, register, update and delete projects on behalf of a caller
///
/// The caller is resolved upstream; this service never authenticates. Every
/// operation that names a project loads it and runs the ownership guard
/// before returning or changing anything.
#[derive(Clone)]
pub struct ProjectService {
    context: ServiceContext,
    scheduler: InstallmentScheduler,
}

impl ProjectService {
    pub fn new(context: ServiceContext, scheduler: InstallmentScheduler) -> Self {
        Self { context, scheduler }
    }

    /// Get one of the caller's projects
    pub async fn get_by_id(&self, caller: UserId, id: &str) -> Result<FreelaView, FreelasError> {
        let freela = self.load_owned(caller, id).await?;
        Ok(freela_view(self.context.codec.as_ref(), &freela)?)
    }

    /// List the caller's projects
    ///
    /// Filters by name first, sorts by name ascending, then cuts the page,
    /// so the metadata describes the filtered listing.
    pub async fn list_all(
        &self,
        caller: UserId,
        filter: &NameFilter,
        pagination: Pagination,
    ) -> Result<Page<FreelaSummaryView>, FreelasError> {
        let (page, page_size) = pagination.normalize(&self.context.pagination);

        let freelas = self.context.repository.list_freelas(caller).await?;
        let mut freelas = filter.apply(freelas, |f| f.name.as_str());
        freelas.sort_by(|a, b| by_name((a.name.as_str(), a.id), (b.name.as_str(), b.id)));

        tracing::debug!(
            caller = %caller,
            filtered = filter.is_active(),
            matched = freelas.len(),
            page,
            page_size,
            "listing projects"
        );

        let codec = self.context.codec.as_ref();
        Ok(Page::slice(freelas, page, page_size).try_map(|f| freela_summary_view(codec, &f))?)
    }

    /// Register a project and generate its installment schedule
    pub async fn register(
        &self,
        caller: UserId,
        request: RegisterFreelaRequest,
    ) -> Result<FreelaView, FreelasError> {
        let mut failure = validate_request(&request).err().unwrap_or_default();
        self.check_limits(
            Some(request.price),
            Some(request.payment_installment_count),
            &mut failure,
        );
        failure.into_result()?;

        let customer_id = CustomerId::new(
            self.context
                .decode(ResourceKind::Customer, &request.customer_id)?,
        );
        let customer = self
            .context
            .repository
            .find_customer(customer_id)
            .await?
            .filter(|c| {
                self.context
                    .authorize(caller, c.owner_id, ResourceKind::Customer)
                    .is_ok()
            })
            .ok_or(FreelasError::CustomerNotFound)?;

        let installments = self.scheduler.generate(
            request.price,
            request.payment_installment_count,
            request.start_payment_date,
        )?;

        let freela = self
            .context
            .repository
            .insert_freela(NewFreela {
                name: request.name.trim().to_string(),
                price: request.price,
                payment_installment_count: request.payment_installment_count,
                start_payment_date: request.start_payment_date,
                owner_id: caller,
                customer_id: customer.id,
                installments,
            })
            .await?;

        tracing::info!(
            caller = %caller,
            freela_id = %freela.id,
            installments = freela.installments.len(),
            total = %freela.scheduled_total(),
            "registered project"
        );

        Ok(freela_view(self.context.codec.as_ref(), &freela)?)
    }

    /// Apply the fields present in `request` to one of the caller's projects
    ///
    /// Installments are not regenerated.
    pub async fn update(
        &self,
        caller: UserId,
        id: &str,
        request: UpdateFreelaRequest,
    ) -> Result<(), FreelasError> {
        let mut failure = validate_request(&request).err().unwrap_or_default();
        self.check_limits(request.price, request.payment_installment_count, &mut failure);
        failure.into_result()?;

        let mut freela = self.load_owned(caller, id).await?;
        apply_update(&mut freela, request);
        self.context.repository.update_freela(&freela).await?;

        tracing::info!(caller = %caller, freela_id = %freela.id, "updated project");
        Ok(())
    }

    /// Delete one of the caller's projects and its installments
    pub async fn delete(&self, caller: UserId, id: &str) -> Result<(), FreelasError> {
        let freela = self.load_owned(caller, id).await?;
        self.context.repository.delete_freela(freela.id).await?;

        tracing::info!(caller = %caller, freela_id = %freela.id, "deleted project");
        Ok(())
    }

    /// Add the scheduler's limits to the failures of a request
    ///
    /// Non-positive prices and zero counts are left to the declared rules.
    fn check_limits(
        &self,
        price: Option<Decimal>,
        count: Option<u32>,
        failure: &mut ValidationFailure,
    ) {
        let price_check = price.map(|p| self.scheduler.check_price(p));
        let count_check = count.map(|c| self.scheduler.check_count(c));
        let split_check = match (price, count, &price_check, &count_check) {
            (Some(p), Some(c), Some(Ok(())), Some(Ok(()))) => Some(self.scheduler.check(p, c)),
            _ => None,
        };

        for err in [price_check, count_check, split_check]
            .into_iter()
            .flatten()
            .filter_map(Result::err)
        {
            if !matches!(
                err,
                ScheduleError::NonPositivePrice { .. } | ScheduleError::NoInstallments
            ) {
                failure.push(err);
            }
        }
    }

    /// Decode, load and authorize
    async fn load_owned(&self, caller: UserId, id: &str) -> Result<Freela, FreelasError> {
        let id = FreelaId::new(self.context.decode(ResourceKind::Freela, id)?);

        let freela = self
            .context
            .repository
            .find_freela(id)
            .await?
            .ok_or(FreelasError::not_found(ResourceKind::Freela))?;
        self.context
            .authorize(caller, freela.owner_id, ResourceKind::Freela)?;

        Ok(freela)
    }
}

/// Sparse merge of an update into a project
fn apply_update(freela: &mut Freela, request: UpdateFreelaRequest) {
    if let Some(name) = request.name {
        freela.name = name.trim().to_string();
    }
    if let Some(price) = request.price {
        freela.price = price;
    }
    if let Some(count) = request.payment_installment_count {
        freela.payment_installment_count = count;
    }
    if let Some(date) = request.start_payment_date {
        freela.start_payment_date = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn freela() -> Freela {
        Freela {
            id: FreelaId::new(1),
            name: "Site".to_string(),
            price: Decimal::from(100),
            payment_installment_count: 2,
            start_payment_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            owner_id: UserId::new(1),
            customer_id: CustomerId::new(1),
            installments: Vec::new(),
        }
    }

    #[test]
    fn test_apply_update_only_touches_present_fields() {
        let mut target = freela();
        apply_update(
            &mut target,
            UpdateFreelaRequest {
                price: Some(Decimal::from(250)),
                ..Default::default()
            },
        );

        assert_eq!(target.price, Decimal::from(250));
        assert_eq!(target.name, "Site");
        assert_eq!(target.payment_installment_count, 2);
    }

    #[test]
    fn test_apply_update_trims_name() {
        let mut target = freela();
        apply_update(
            &mut target,
            UpdateFreelaRequest {
                name: Some("  Shop  ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(target.name, "Shop");
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut target = freela();
        let request = UpdateFreelaRequest::default();
        assert!(request.is_empty());

        apply_update(&mut target, request);
        assert_eq!(target, freela());
    }
}
