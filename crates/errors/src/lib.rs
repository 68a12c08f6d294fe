//! vela-errors - 统一错误处理
//!
//! 服务侧错误分类：校验失败、未找到、瞬时故障、持久故障。
//! 每一层只向上暴露本层的分类，原始底层错误信息不跨越 RPC 边界。

use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 调用方输入不合法，原样重试必然再次失败
    #[error("Validation error: {0}")]
    Validation(String),

    /// 请求合法但目标数据不存在
    #[error("Not found: {0}")]
    NotFound(String),

    /// 基础设施瞬时故障（连接丢失、获取连接超时），可安全重试
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// 存储层持久故障（损坏的行、驱动内部错误），重试不安全
    #[error("Database error: {0}")]
    Database(String),

    /// 未分类的内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 是否为可安全重试的瞬时故障
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// 转换为 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            Self::Validation(_) => tonic::Code::InvalidArgument,
            Self::NotFound(_) => tonic::Code::NotFound,
            Self::Unavailable(_) => tonic::Code::Unavailable,
            Self::Database(_) => tonic::Code::Internal,
            Self::Internal(_) => tonic::Code::Internal,
        }
    }

    /// 对外安全的状态消息
    ///
    /// Validation/NotFound 的消息由本服务构造，可以原样携带；
    /// 基础设施错误的消息可能包含连接串等细节，只返回泛化描述。
    fn safe_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::NotFound(msg) => msg.clone(),
            Self::Unavailable(_) => "service temporarily unavailable".to_string(),
            Self::Database(_) | Self::Internal(_) => "internal error".to_string(),
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        tonic::Status::new(err.grpc_code(), err.safe_message())
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grpc_code_mapping() {
        assert_eq!(
            AppError::validation("bad id").grpc_code(),
            tonic::Code::InvalidArgument
        );
        assert_eq!(
            AppError::not_found("acct-1").grpc_code(),
            tonic::Code::NotFound
        );
        assert_eq!(
            AppError::unavailable("pool timed out").grpc_code(),
            tonic::Code::Unavailable
        );
        assert_eq!(
            AppError::database("bad row").grpc_code(),
            tonic::Code::Internal
        );
        assert_eq!(AppError::internal("?").grpc_code(), tonic::Code::Internal);
    }

    #[test]
    fn test_transient_classification() {
        assert!(AppError::unavailable("connection reset").is_transient());
        assert!(!AppError::database("duplicate key").is_transient());
        assert!(!AppError::validation("empty id").is_transient());
    }

    #[test]
    fn test_status_conversion_hides_infrastructure_detail() {
        let status: tonic::Status =
            AppError::unavailable("connect to postgres://user:secret@db failed").into();
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert!(!status.message().contains("secret"));
        assert!(!status.message().contains("postgres://"));

        let status: tonic::Status = AppError::database("row decode: column `email`").into();
        assert_eq!(status.code(), tonic::Code::Internal);
        assert_eq!(status.message(), "internal error");
    }

    #[test]
    fn test_status_conversion_keeps_own_messages() {
        let status: tonic::Status = AppError::not_found("account not found: acct-1").into();
        assert_eq!(status.message(), "account not found: acct-1");
    }
}
