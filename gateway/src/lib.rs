//! Vela API Gateway
//!
//! 将账户 gRPC 服务桥接为 GraphQL API。类型化 schema 镜像 RPC 接口，
//! 在 `/graphql` 提供服务（GET 为 GraphiQL，POST 为查询）。

pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod grpc;
