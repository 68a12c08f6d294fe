//! IAM Account Service - 账户服务入口
//!
//! 使用 vela-bootstrap 统一启动模式

use std::sync::Arc;

use iam_account::api::grpc::AccountServiceImpl;
use iam_account::api::grpc::account_proto::FILE_DESCRIPTOR_SET;
use iam_account::api::grpc::account_proto::account_service_server::AccountServiceServer;
use iam_account::domain::AccountRepository;
use iam_account::infrastructure::persistence::PostgresAccountRepository;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::info;
use vela_bootstrap::{Infrastructure, run_server, shutdown_signal};
use vela_errors::AppError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |infra: Infrastructure, mut server| async move {
        let pool = infra.postgres_pool();
        let config = infra.config();

        let account_repo: Arc<dyn AccountRepository> =
            Arc::new(PostgresAccountRepository::new(pool));
        let account_service = AccountServiceImpl::new(account_repo);
        info!("Account service initialized");

        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| AppError::internal(format!("Invalid address: {}", e)))?;

        let reflection_service = ReflectionBuilder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()
            .map_err(|e| {
                AppError::internal(format!("Failed to build reflection service: {}", e))
            })?;

        server
            .add_service(AccountServiceServer::new(account_service))
            .add_service(reflection_service)
            .serve_with_shutdown(addr, shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

        Ok(())
    })
    .await
}
