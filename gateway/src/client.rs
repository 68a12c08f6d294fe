//! 账户服务 gRPC 客户端
//!
//! 懒连接、单次调用超时、仅对 UNAVAILABLE 指数退避重试。
//! 调用超时按 DEADLINE_EXCEEDED 处理，不参与重试。

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};
use tracing::{debug, warn};
use vela_common::retry::RetryConfig;

use crate::config::GatewayConfig;
use crate::error::ClientError;
use crate::grpc::account::account_service_client::AccountServiceClient;
use crate::grpc::account::{self, GetAccountRequest, GetAccountResponse};

/// 网关侧账户视图
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<account::Account> for Account {
    fn from(proto: account::Account) -> Self {
        Self {
            id: proto.id,
            display_name: proto.display_name,
            // 线上空字符串表示未设置
            email: if proto.email.is_empty() {
                None
            } else {
                Some(proto.email)
            },
            created_at: from_proto_timestamp(proto.created_at),
            updated_at: from_proto_timestamp(proto.updated_at),
        }
    }
}

fn from_proto_timestamp(ts: Option<prost_types::Timestamp>) -> DateTime<Utc> {
    ts.and_then(|t| DateTime::from_timestamp(t.seconds, t.nanos.max(0) as u32))
        .unwrap_or_default()
}

/// 账户查询接口
///
/// GraphQL 解析器通过该 trait 调用下游，测试中用假实现替换。
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn get_account(&self, id: &str) -> Result<Account, ClientError>;
}

/// 真实 gRPC 客户端
#[derive(Clone)]
pub struct AccountClient {
    inner: AccountServiceClient<Channel>,
    call_timeout: Duration,
    retry: RetryConfig,
}

impl AccountClient {
    /// 创建客户端（懒连接，首次调用时建立连接）
    pub fn new(config: &GatewayConfig) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(config.account_endpoint.clone())?.connect_lazy();

        Ok(Self {
            inner: AccountServiceClient::new(channel),
            call_timeout: Duration::from_millis(config.call_timeout_ms),
            retry: RetryConfig::new(
                config.retry_max_attempts,
                Duration::from_millis(config.retry_initial_delay_ms),
                Duration::from_secs(2),
            ),
        })
    }

    async fn call_once(&self, id: &str) -> Result<GetAccountResponse, Status> {
        let mut client = self.inner.clone();
        let request = tonic::Request::new(GetAccountRequest { id: id.to_string() });

        match tokio::time::timeout(self.call_timeout, client.get_account(request)).await {
            Ok(result) => result.map(|response| response.into_inner()),
            Err(_) => Err(Status::deadline_exceeded("account call timed out")),
        }
    }
}

#[async_trait]
impl AccountApi for AccountClient {
    async fn get_account(&self, id: &str) -> Result<Account, ClientError> {
        let mut attempt = 0u32;
        let response = loop {
            match self.call_once(id).await {
                Ok(response) => break response,
                Err(status)
                    if status.code() == Code::Unavailable
                        && attempt + 1 < self.retry.max_attempts =>
                {
                    let delay = self.retry.delay_for_attempt(attempt);
                    warn!(
                        account_id = %id,
                        attempt = attempt + 1,
                        max_attempts = self.retry.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Account service unavailable, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(status) => return Err(ClientError::from(status)),
            }
        };

        debug!(account_id = %id, attempts = attempt + 1, "Account fetched");

        // 成功响应必须携带账户字段
        let proto = response.account.ok_or(ClientError::Internal)?;
        Ok(Account::from(proto))
    }
}
