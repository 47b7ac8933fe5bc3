//! Installment schedule generation
//!
//! A project of price `P` paid in `N` installments starting on `D` gets one
//! installment per month: `D`, `D + 1 month`, ... `D + (N - 1) months`.
//!
//! # Rounding
//!
//! Each installment but the last is `P / N` truncated toward zero to the
//! configured number of decimal places. The last installment takes whatever
//! is left, so the schedule always sums to exactly `P`:
//!
//! | price | count | installments              |
//! |-------|-------|---------------------------|
//! | 1200  | 3     | 400, 400, 400             |
//! | 100   | 3     | 33.33, 33.33, 33.34       |
//! | 10    | 4     | 2.50, 2.50, 2.50, 2.50    |
//!
//! # Month stepping
//!
//! Dates are computed from the start date for every installment rather than
//! from the previous one, and clamp to the end of shorter months: a schedule
//! starting on January 31st continues on February 29th (or 28th), then March 31st.
//!
//! # Limits
//!
//! The count is bounded by the configured maximum. A price may not carry more
//! decimal places than the scale, and must be large enough that no
//! installment truncates to zero.

use crate::core::entity::ScheduledInstallment;
use crate::core::error::ScheduleError;
use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Default number of decimal places of a non-final installment
pub const DEFAULT_SCALE: u32 = 2;

/// Default upper bound on the installment count of one project (50 years)
pub const DEFAULT_MAX_INSTALLMENTS: u32 = 600;

/// Derives the payment schedule of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallmentScheduler {
    scale: u32,
    max_installments: u32,
}

impl InstallmentScheduler {
    /// Create a scheduler rounding non-final installments to `scale` places
    pub fn new(scale: u32) -> Self {
        Self {
            scale,
            max_installments: DEFAULT_MAX_INSTALLMENTS,
        }
    }

    pub fn with_max_installments(mut self, max_installments: u32) -> Self {
        self.max_installments = max_installments;
        self
    }

    /// A price must be positive and expressed in at most `scale` places
    pub fn check_price(&self, price: Decimal) -> Result<(), ScheduleError> {
        if price <= Decimal::ZERO {
            return Err(ScheduleError::NonPositivePrice { price });
        }
        if price.normalize().scale() > self.scale {
            return Err(ScheduleError::PriceTooPrecise {
                price,
                scale: self.scale,
            });
        }
        Ok(())
    }

    pub fn check_count(&self, count: u32) -> Result<(), ScheduleError> {
        if count == 0 {
            return Err(ScheduleError::NoInstallments);
        }
        if count > self.max_installments {
            return Err(ScheduleError::TooManyInstallments {
                count,
                max: self.max_installments,
            });
        }
        Ok(())
    }

    /// Check everything [`generate`](Self::generate) needs except the dates
    ///
    /// Every installment must be worth at least one unit of the last decimal
    /// place, so `price` must be at least `count * 10^-scale`.
    pub fn check(&self, price: Decimal, count: u32) -> Result<(), ScheduleError> {
        self.check_price(price)?;
        self.check_count(count)?;
        if self.per_installment(price, count).is_zero() {
            return Err(ScheduleError::InstallmentBelowMinimum { price, count });
        }
        Ok(())
    }

    fn per_installment(&self, price: Decimal, count: u32) -> Decimal {
        (price / Decimal::from(count)).round_dp_with_strategy(self.scale, RoundingStrategy::ToZero)
    }

    /// Generate `count` installments, ordered by month ascending
    pub fn generate(
        &self,
        price: Decimal,
        count: u32,
        start: NaiveDate,
    ) -> Result<Vec<ScheduledInstallment>, ScheduleError> {
        self.check(price, count)?;

        let per_installment = self.per_installment(price, count);
        let last_installment = price - per_installment * Decimal::from(count - 1);

        (0..count)
            .map(|index| {
                let month = start
                    .checked_add_months(Months::new(index))
                    .ok_or(ScheduleError::DateOutOfRange { index })?;
                let value = if index + 1 == count {
                    last_installment
                } else {
                    per_installment
                };
                Ok(ScheduledInstallment { month, value })
            })
            .collect()
    }
}

impl Default for InstallmentScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}
