//! GraphQL schema
//!
//! 类型化 schema 镜像账户 RPC 接口。本模块只负责 schema、
//! 类型与解析器，HTTP 接入由 main 负责。

pub mod query;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::client::AccountApi;
use query::QueryRoot;

pub type GatewaySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// 构建 schema，注入账户客户端
pub fn build_schema(account_api: Arc<dyn AccountApi>) -> GatewaySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(account_api)
        .finish()
}
