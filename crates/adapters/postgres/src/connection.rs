//! PostgreSQL 连接管理

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::debug;
use vela_errors::AppResult;

use crate::map_sqlx_error;

/// PostgreSQL 连接池配置
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

/// 创建 PostgreSQL 连接池
///
/// 使用 connect_lazy 语义之外的即时连接，失败由调用方决定是否重试。
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| map_sqlx_error("create postgres pool", e))?;

    debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "postgres pool created"
    );
    Ok(pool)
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| map_sqlx_error("postgres connectivity check", e))?;
    Ok(())
}

/// 连接池状态快照
#[derive(Debug, Clone, Copy)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: u32,
    pub active: u32,
}

/// 读取连接池当前状态，用于指标上报
pub fn pool_status(pool: &PgPool) -> PoolStatus {
    let size = pool.size();
    let idle = pool.num_idle() as u32;
    PoolStatus {
        size,
        idle,
        active: size.saturating_sub(idle),
    }
}
