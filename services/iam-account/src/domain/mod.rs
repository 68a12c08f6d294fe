//! 领域层

pub mod account;
pub mod repository;

pub use account::Account;
pub use repository::AccountRepository;
