//! IAM Account Service Library
//!
//! 模块化架构：
//! - `api`: gRPC 接入层
//! - `domain`: 账户实体与仓储接口
//! - `infrastructure`: 持久化实现

pub mod api;
pub mod domain;
pub mod infrastructure;
