//! Freelance projects and their payment schedules

pub mod requests;
pub mod service;
pub mod views;

pub use requests::{RegisterFreelaRequest, UpdateFreelaRequest};
pub use service::ProjectService;
pub use views::{FreelaSummaryView, FreelaView, InstallmentView};
