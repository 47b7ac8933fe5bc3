//! Project views
//!
//! Views never carry raw storage keys: project and customer ids are encoded
//! here, in plain sight, by the conversion functions.

use crate::core::codec::IdentifierCodec;
use crate::core::entity::{Freela, Installment};
use crate::core::error::CodecError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Full view of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreelaView {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub payment_installment_count: u32,
    pub start_payment_date: NaiveDate,
    pub customer_id: String,
    pub installments: Vec<InstallmentView>,
}

/// One installment, embedded in its project's view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallmentView {
    pub month: NaiveDate,
    pub value: Decimal,
}

/// Listing entry of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreelaSummaryView {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub customer_id: String,
}

pub fn installment_view(installment: &Installment) -> InstallmentView {
    InstallmentView {
        month: installment.month,
        value: installment.value,
    }
}

pub fn freela_view(codec: &dyn IdentifierCodec, freela: &Freela) -> Result<FreelaView, CodecError> {
    Ok(FreelaView {
        id: codec.encode(freela.id.as_u64())?,
        name: freela.name.clone(),
        price: freela.price,
        payment_installment_count: freela.payment_installment_count,
        start_payment_date: freela.start_payment_date,
        customer_id: codec.encode(freela.customer_id.as_u64())?,
        installments: freela.installments.iter().map(installment_view).collect(),
    })
}

pub fn freela_summary_view(
    codec: &dyn IdentifierCodec,
    freela: &Freela,
) -> Result<FreelaSummaryView, CodecError> {
    Ok(FreelaSummaryView {
        id: codec.encode(freela.id.as_u64())?,
        name: freela.name.clone(),
        price: freela.price,
        customer_id: codec.encode(freela.customer_id.as_u64())?,
    })
}
