//! Shared test harness for repository and service testing
//!
//! Provides record builders, a service factory over any repository, and the
//! `project_repository_tests!` conformance suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod repository_tests;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use freelas::builder::{Freelas, FreelasBuilder};
use freelas::core::entity::{CustomerId, NewCustomer, NewFreela, ScheduledInstallment, UserId};
use freelas::customers::RegisterCustomerRequest;
use freelas::projects::RegisterFreelaRequest;
use freelas::storage::InMemoryProjectRepository;

pub const ALICE: UserId = UserId::new(1);
pub const BOB: UserId = UserId::new(2);

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Repository records
// ---------------------------------------------------------------------------

pub fn new_customer(owner: UserId, name: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        owner_id: owner,
    }
}

/// A project with one installment per month in `months`, each worth 100
pub fn new_freela(
    owner: UserId,
    customer_id: CustomerId,
    name: &str,
    months: &[NaiveDate],
) -> NewFreela {
    NewFreela {
        name: name.to_string(),
        price: Decimal::from(100 * months.len() as u64),
        payment_installment_count: months.len() as u32,
        start_payment_date: months.first().copied().unwrap_or(date(2024, 1, 1)),
        owner_id: owner,
        customer_id,
        installments: months
            .iter()
            .map(|month| ScheduledInstallment {
                month: *month,
                value: Decimal::from(100),
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// Services over a fresh in-memory repository, plus a handle to the repository
pub fn services() -> (Freelas, InMemoryProjectRepository) {
    let repository = InMemoryProjectRepository::new();
    let freelas = FreelasBuilder::new()
        .with_repository(repository.clone())
        .build()
        .unwrap();
    (freelas, repository)
}

pub fn customer_request(name: &str) -> RegisterCustomerRequest {
    RegisterCustomerRequest {
        name: name.to_string(),
    }
}

pub fn freela_request(
    name: &str,
    price: &str,
    count: u32,
    start: NaiveDate,
    customer_id: &str,
) -> RegisterFreelaRequest {
    RegisterFreelaRequest {
        name: name.to_string(),
        price: dec(price),
        payment_installment_count: count,
        start_payment_date: start,
        customer_id: customer_id.to_string(),
    }
}

/// Register a customer for `owner` and return its opaque id
pub async fn seed_customer(freelas: &Freelas, owner: UserId, name: &str) -> String {
    freelas
        .customers
        .register(owner, customer_request(name))
        .await
        .unwrap()
        .id
}

/// Register a 1000, 2-installment project and return its opaque id
pub async fn seed_freela(freelas: &Freelas, owner: UserId, customer_id: &str, name: &str) -> String {
    freelas
        .projects
        .register(
            owner,
            freela_request(name, "1000", 2, date(2024, 1, 10), customer_id),
        )
        .await
        .unwrap()
        .id
}
