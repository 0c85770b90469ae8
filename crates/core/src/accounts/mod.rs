//! Catalogue accounts and the flagged state maintained by the activity monitor.

mod accounts_model;
mod accounts_repository;
mod accounts_service;

pub use accounts_model::{Account, NewAccount, ROLE_ADMIN, ROLE_REGULAR};
pub use accounts_repository::AccountRepository;
pub use accounts_service::AccountService;
