//! Gateway 配置

use std::env;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub app_env: String,
    pub host: String,
    pub port: u16,
    pub account_endpoint: String,
    /// 单次下游调用超时（毫秒）
    pub call_timeout_ms: u64,
    /// 下游不可用时的最大尝试次数（含首次）
    pub retry_max_attempts: u32,
    /// 重试退避初始延迟（毫秒）
    pub retry_initial_delay_ms: u64,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            account_endpoint: env::var("ACCOUNT_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:50051".to_string()),
            call_timeout_ms: env::var("ACCOUNT_CALL_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            retry_max_attempts: env::var("ACCOUNT_RETRY_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_initial_delay_ms: env::var("ACCOUNT_RETRY_INITIAL_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
        }
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
