//! Customers recorded by a user

pub mod requests;
pub mod service;
pub mod views;

pub use requests::{RegisterCustomerRequest, UpdateCustomerRequest};
pub use service::CustomerService;
pub use views::CustomerView;
