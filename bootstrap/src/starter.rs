//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::{error, info};
use vela_config::AppConfig;
use vela_errors::AppResult;

use crate::health::{HealthChecker, HealthServer};
use crate::infrastructure::Infrastructure;
use crate::metrics::{MetricsRecorder, PoolMetricsCollector};
use crate::runtime::init_runtime;

/// 运行 gRPC 服务
///
/// 这是所有微服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 创建基础设施资源（数据库连接池，带重试）
/// 4. 启动健康检查 HTTP 服务器（gRPC 端口 + 1000）
/// 5. 启动连接池 metrics 采集器
/// 6. 调用闭包注册服务并启动服务器
///
/// 闭包负责 `add_service` 和 `serve_with_shutdown`，以便注册
/// 多个服务（含反射服务）。
///
/// # 示例
///
/// ```ignore
/// use vela_bootstrap::{run_server, shutdown_signal};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |infra, mut server| async move {
///         let service = MyServiceImpl::new(infra.postgres_pool());
///         let addr = "0.0.0.0:50051".parse().unwrap();
///         server
///             .add_service(MyServiceServer::new(service))
///             .serve_with_shutdown(addr, shutdown_signal())
///             .await
///             .map_err(|e| vela_errors::AppError::internal(e.to_string()))
///     })
///     .await
/// }
/// ```
pub async fn run_server<F, Fut>(
    config_dir: &str,
    server_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure, Server) -> Fut,
    Fut: Future<Output = AppResult<()>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = Arc::new(MetricsRecorder::new());

    // 4. 创建基础设施（带重试）
    let infra = Infrastructure::from_config(config.clone()).await?;

    // 5. 创建健康检查器
    let health_checker = Arc::new(HealthChecker::new());
    health_checker.set_infrastructure(infra.clone()).await;

    // 6. 启动连接池 metrics 采集器
    let pool_collector = PoolMetricsCollector::default();
    pool_collector
        .set_infrastructure(Arc::new(infra.clone()))
        .await;
    let _collector_handle = pool_collector.start();

    // 7. 启动健康检查 HTTP 服务器（gRPC 端口 + 1000）
    let health_port = config.server.port + 1000;
    let health_server = HealthServer::new(health_checker, metrics, health_port);
    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve().await {
            error!("Health server error: {}", e);
        }
    });

    info!(
        host = %config.server.host,
        port = config.server.port,
        "gRPC server starting"
    );

    // 8. 让调用方注册服务并启动服务器
    let server = Server::builder();
    server_builder(infra, server).await?;

    // 9. 清理
    health_handle.abort();

    info!("Service stopped");

    Ok(())
}
