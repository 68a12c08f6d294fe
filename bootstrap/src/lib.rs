//! vela-bootstrap - 统一服务启动骨架
//!
//! 所有 gRPC 服务复用的启动逻辑：配置加载、运行时初始化、
//! 基础设施资源创建、健康检查与指标导出。

mod health;
mod infrastructure;
mod metrics;
mod runtime;
mod starter;

pub use health::*;
pub use infrastructure::*;
pub use metrics::*;
pub use runtime::*;
pub use starter::*;
