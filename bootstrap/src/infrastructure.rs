//! 基础设施资源管理
//!
//! 统一管理所有微服务共享的基础设施资源

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;
use vela_adapter_postgres::{PoolStatus, PostgresConfig, create_pool, pool_status};
use vela_common::retry::{RetryConfig, with_retry};
use vela_config::AppConfig;
use vela_errors::AppResult;

/// 启动期连接重试配置
///
/// 容器编排环境下数据库可能晚于服务就绪，启动时用较长的退避窗口。
fn startup_retry_config() -> RetryConfig {
    RetryConfig::new(5, Duration::from_secs(1), Duration::from_secs(30))
}

/// 基础设施资源容器
///
/// 包含微服务共享的基础设施资源，由 bootstrap 统一初始化。
/// 内部资源均为句柄，Clone 开销很小。
#[derive(Clone)]
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let retry_config = startup_retry_config();

        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections);
        let postgres_pool = with_retry(&retry_config, "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            max_connections = config.database.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 获取服务器配置
    pub fn server_config(&self) -> &vela_config::ServerConfig {
        &self.config.server
    }

    /// 获取 PostgreSQL 连接池状态
    pub fn postgres_pool_status(&self) -> PoolStatus {
        pool_status(&self.postgres_pool)
    }
}
