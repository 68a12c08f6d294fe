//! sqlx 错误分类
//!
//! 将底层驱动错误归类为可重试的 Unavailable 或不可重试的 Database，
//! 分类结果决定 gRPC 状态码与网关侧的重试行为。

use vela_errors::AppError;

/// 将 sqlx 错误映射为应用错误
///
/// 连接层故障（IO、TLS、连接池耗尽或关闭）视为临时不可用，
/// 其余一律视为内部数据库错误。`context` 说明失败的操作。
pub fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            AppError::unavailable(format!("{context}: {err}"))
        }
        other => AppError::database(format!("{context}: {other}")),
    }
}
