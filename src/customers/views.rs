//! Customer views

use crate::core::codec::IdentifierCodec;
use crate::core::entity::Customer;
use crate::core::error::CodecError;
use serde::Serialize;

/// View of one customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerView {
    pub id: String,
    pub name: String,
}

pub fn customer_view(
    codec: &dyn IdentifierCodec,
    customer: &Customer,
) -> Result<CustomerView, CodecError> {
    Ok(CustomerView {
        id: codec.encode(customer.id.as_u64())?,
        name: customer.name.clone(),
    })
}
