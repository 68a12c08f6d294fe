//! vela-adapter-postgres - PostgreSQL 适配器
//!
//! 提供连接池管理、连通性检查和 sqlx 错误分类。

mod connection;
mod error;

pub use connection::*;
pub use error::*;
