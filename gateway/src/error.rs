//! 网关客户端错误
//!
//! 将下游 gRPC 状态归类为网关内部错误，再由 GraphQL 层
//! 转换为带 `extensions.code` 的响应错误。

use async_graphql::ErrorExtensions;
use thiserror::Error;
use tonic::{Code, Status};

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// 参数被下游拒绝，消息来自下游（已脱敏）
    #[error("{0}")]
    InvalidInput(String),

    /// 账户不存在
    #[error("{0}")]
    NotFound(String),

    /// 下游暂时不可用（含调用超时）
    #[error("account service unavailable")]
    Unavailable,

    /// 其他所有下游错误
    #[error("internal error")]
    Internal,
}

impl ClientError {
    /// GraphQL `extensions.code` 值
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::InvalidInput(_) => "BAD_USER_INPUT",
            ClientError::NotFound(_) => "ACCOUNT_NOT_FOUND",
            ClientError::Unavailable | ClientError::Internal => "INTERNAL_ERROR",
        }
    }

    /// 是否值得重试
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Unavailable)
    }
}

impl From<Status> for ClientError {
    fn from(status: Status) -> Self {
        match status.code() {
            Code::InvalidArgument => ClientError::InvalidInput(status.message().to_string()),
            Code::NotFound => ClientError::NotFound(status.message().to_string()),
            Code::Unavailable | Code::DeadlineExceeded => ClientError::Unavailable,
            _ => ClientError::Internal,
        }
    }
}

impl ErrorExtensions for ClientError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_maps_to_invalid_input() {
        let err = ClientError::from(Status::invalid_argument("Invalid account id: empty"));
        assert!(matches!(err, ClientError::InvalidInput(_)));
        assert_eq!(err.code(), "BAD_USER_INPUT");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_not_found_keeps_message() {
        let err = ClientError::from(Status::not_found("Account not found: missing"));
        assert_eq!(err.code(), "ACCOUNT_NOT_FOUND");
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_unavailable_and_timeout_are_retryable() {
        let unavailable = ClientError::from(Status::unavailable("connection refused"));
        assert!(unavailable.is_retryable());
        assert_eq!(unavailable.code(), "INTERNAL_ERROR");

        let timeout = ClientError::from(Status::deadline_exceeded("timed out"));
        assert!(timeout.is_retryable());
    }

    #[test]
    fn test_unavailable_hides_downstream_detail() {
        let err = ClientError::from(Status::unavailable("dns error: db.internal:5432"));
        assert!(!err.to_string().contains("db.internal"));
    }

    #[test]
    fn test_unknown_codes_collapse_to_internal() {
        for status in [
            Status::internal("boom"),
            Status::unknown("?"),
            Status::permission_denied("nope"),
        ] {
            let err = ClientError::from(status);
            assert!(matches!(err, ClientError::Internal));
            assert_eq!(err.code(), "INTERNAL_ERROR");
            assert_eq!(err.to_string(), "internal error");
        }
    }

    #[test]
    fn test_extend_sets_code_extension() {
        let err = ClientError::NotFound("Account not found: acct-9".to_string());
        let gql = err.extend();
        assert_eq!(gql.message, "Account not found: acct-9");
        assert!(gql.extensions.is_some());
    }
}
