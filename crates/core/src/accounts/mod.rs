//! Accounts module - domain models and repository port.

mod accounts_model;
mod accounts_traits;


pub use accounts_model::{Account, AccountType, AccountUpdate, NewAccount};
pub use accounts_traits::AccountRepositoryTrait;
