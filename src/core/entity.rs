//! Entities and their keys
//!
//! Records reference each other through plain id fields only. A [`Freela`]
//! owns its installments by value; an [`Installment`] points back to its
//! project with a [`FreelaId`], never with a live reference.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Define a type-safe wrapper around a non-negative `u64` storage key.
///
/// Keys of different entities are distinct types, so a `CustomerId` can never
/// be passed where a `FreelaId` is expected.
///
/// ```rust
/// # use freelas::define_id;
/// define_id!(TicketId);
///
/// let id = TicketId::new(3);
/// assert_eq!(id.as_u64(), 3);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a raw key.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying key.
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(UserId);
define_id!(CustomerId);
define_id!(FreelaId);
define_id!(InstallmentId);

/// Kinds of resources exposed through opaque identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Customer,
    Freela,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Customer => "customer",
            ResourceKind::Freela => "project",
        })
    }
}

/// A customer recorded by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub owner_id: UserId,
}

/// A customer that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub owner_id: UserId,
}

/// A freelance project engagement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freela {
    pub id: FreelaId,
    pub name: String,
    pub price: Decimal,
    pub payment_installment_count: u32,
    pub start_payment_date: NaiveDate,
    pub owner_id: UserId,
    pub customer_id: CustomerId,
    /// Ordered by month ascending
    pub installments: Vec<Installment>,
}

impl Freela {
    /// Sum of all installment values
    pub fn scheduled_total(&self) -> Decimal {
        self.installments.iter().map(|i| i.value).sum()
    }
}

/// A project that has not been persisted yet, schedule included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFreela {
    pub name: String,
    pub price: Decimal,
    pub payment_installment_count: u32,
    pub start_payment_date: NaiveDate,
    pub owner_id: UserId,
    pub customer_id: CustomerId,
    pub installments: Vec<ScheduledInstallment>,
}

/// One persisted payment of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub id: InstallmentId,
    pub freela_id: FreelaId,
    pub month: NaiveDate,
    pub value: Decimal,
}

/// One payment produced by the scheduler, before ids are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledInstallment {
    pub month: NaiveDate,
    pub value: Decimal,
}
