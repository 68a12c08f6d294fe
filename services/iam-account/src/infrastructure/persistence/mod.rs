//! 账户持久化实现

mod memory_account_repository;
mod postgres_account_repository;

pub use memory_account_repository::*;
pub use postgres_account_repository::*;
