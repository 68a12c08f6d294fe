//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出

use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::sync::RwLock;
use tracing::debug;
use vela_adapter_postgres::PoolStatus;

use crate::infrastructure::Infrastructure;

/// Metrics 记录器
///
/// 进程内只能安装一次全局 recorder。
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 创建新的 Metrics 记录器
    pub fn new() -> Self {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("Failed to install Prometheus recorder");

        Self { handle }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

/// 记录 gRPC 请求
pub fn record_grpc_request(service: &str, method: &str, status: &str, duration_ms: f64) {
    let labels = [
        ("service", service.to_string()),
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];

    counter!("grpc_requests_total", &labels).increment(1);
    histogram!("grpc_request_duration_ms", &labels).record(duration_ms);
}

/// 记录数据库查询
pub fn record_db_query(operation: &str, table: &str, duration_ms: f64, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("table", table.to_string()),
        ("success", success.to_string()),
    ];

    counter!("db_queries_total", &labels).increment(1);
    histogram!("db_query_duration_ms", &labels).record(duration_ms);
}

/// 记录 GraphQL 字段解析
pub fn record_graphql_request(field: &str, outcome: &str, duration_ms: f64) {
    let labels = [
        ("field", field.to_string()),
        ("outcome", outcome.to_string()),
    ];

    counter!("graphql_requests_total", &labels).increment(1);
    histogram!("graphql_request_duration_ms", &labels).record(duration_ms);
}

/// 设置连接池使用率
pub fn set_pool_utilization(pool_name: &str, utilization: f64) {
    let labels = [("pool", pool_name.to_string())];
    gauge!("connection_pool_utilization", &labels).set(utilization);
}

/// 请求计时器
pub struct RequestTimer {
    start: Instant,
    service: String,
    method: String,
}

impl RequestTimer {
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            service: service.into(),
            method: method.into(),
        }
    }

    /// 当前耗时（毫秒）
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn finish(self, status: &str) {
        let duration = self.elapsed_ms();
        record_grpc_request(&self.service, &self.method, status, duration);
    }
}

/// 数据库查询计时器
pub struct DbQueryTimer {
    start: Instant,
    operation: String,
    table: String,
}

impl DbQueryTimer {
    pub fn new(operation: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
            table: table.into(),
        }
    }

    pub fn finish(self, success: bool) {
        let duration = self.start.elapsed().as_secs_f64() * 1000.0;
        record_db_query(&self.operation, &self.table, duration, success);
    }
}

/// 连接池 Metrics 采集器
///
/// 定期采集 PostgreSQL 连接池状态
pub struct PoolMetricsCollector {
    infra: Arc<RwLock<Option<Arc<Infrastructure>>>>,
    interval: Duration,
}

impl PoolMetricsCollector {
    /// 创建新的连接池 Metrics 采集器
    pub fn new(interval: Duration) -> Self {
        Self {
            infra: Arc::new(RwLock::new(None)),
            interval,
        }
    }

    /// 设置基础设施引用
    pub async fn set_infrastructure(&self, infra: Arc<Infrastructure>) {
        let mut guard = self.infra.write().await;
        *guard = Some(infra);
    }

    /// 启动后台采集任务
    pub fn start(&self) -> tokio::task::JoinHandle<()> {
        let infra = self.infra.clone();
        let interval = self.interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;

                let guard = infra.read().await;
                if let Some(infra) = guard.as_ref() {
                    let pool_status = infra.postgres_pool_status();
                    record_postgres_pool_metrics(&pool_status);

                    debug!(
                        postgres_size = pool_status.size,
                        postgres_idle = pool_status.idle,
                        postgres_active = pool_status.active,
                        "Pool metrics collected"
                    );
                }
            }
        })
    }
}

impl Default for PoolMetricsCollector {
    fn default() -> Self {
        Self::new(Duration::from_secs(15))
    }
}

/// 记录 PostgreSQL 连接池指标
pub fn record_postgres_pool_metrics(status: &PoolStatus) {
    gauge!("postgres_pool_size").set(status.size as f64);
    gauge!("postgres_pool_idle").set(status.idle as f64);
    gauge!("postgres_pool_active").set(status.active as f64);

    let utilization = if status.size > 0 {
        (status.active as f64 / status.size as f64) * 100.0
    } else {
        0.0
    };
    set_pool_utilization("postgres", utilization);
}
