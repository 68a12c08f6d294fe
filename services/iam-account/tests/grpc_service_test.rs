//! 账户 gRPC 服务测试
//!
//! 直接调用服务实现，覆盖参数校验、未找到、存储故障的状态码映射。

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use iam_account::api::grpc::AccountServiceImpl;
use iam_account::api::grpc::account_proto::GetAccountRequest;
use iam_account::api::grpc::account_proto::account_service_server::AccountService;
use iam_account::domain::{Account, AccountRepository};
use tonic::{Code, Request};
use vela_common::AccountId;
use vela_errors::{AppError, AppResult};

/// 预设行为的测试 Repository
enum StubBehavior {
    Found(Account),
    Missing,
    Transient(String),
    Broken(String),
}

struct StubAccountRepository {
    behavior: StubBehavior,
    calls: AtomicU32,
}

impl StubAccountRepository {
    fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicU32::new(0),
        }
    }

    fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountRepository for StubAccountRepository {
    async fn find_by_id(&self, _id: &AccountId) -> AppResult<Option<Account>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Found(account) => Ok(Some(account.clone())),
            StubBehavior::Missing => Ok(None),
            StubBehavior::Transient(msg) => Err(AppError::unavailable(msg.clone())),
            StubBehavior::Broken(msg) => Err(AppError::database(msg.clone())),
        }
    }
}

fn test_account(id: &str, name: &str) -> Account {
    Account::new(AccountId::new(id).expect("Valid account id"), name)
}

fn service_with(repo: Arc<StubAccountRepository>) -> AccountServiceImpl {
    AccountServiceImpl::new(repo)
}

/// 测试空 ID 被拒绝且不触达存储
#[tokio::test]
async fn test_empty_id_rejected_without_store_call() {
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Missing));
    let service = service_with(repo.clone());

    let status = service
        .get_account(Request::new(GetAccountRequest { id: String::new() }))
        .await
        .expect_err("Empty id must be rejected");

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(repo.call_count(), 0);
}

/// 测试超长 ID 被拒绝
#[tokio::test]
async fn test_oversized_id_rejected() {
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Missing));
    let service = service_with(repo.clone());

    let status = service
        .get_account(Request::new(GetAccountRequest { id: "x".repeat(65) }))
        .await
        .expect_err("Oversized id must be rejected");

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(repo.call_count(), 0);
}

/// 测试非法字符被拒绝
#[tokio::test]
async fn test_id_with_invalid_chars_rejected() {
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Missing));
    let service = service_with(repo.clone());

    for bad in ["has space", "semi;colon", "slash/"] {
        let status = service
            .get_account(Request::new(GetAccountRequest { id: bad.into() }))
            .await
            .expect_err("Invalid id must be rejected");
        assert_eq!(status.code(), Code::InvalidArgument, "id: {bad}");
    }
    assert_eq!(repo.call_count(), 0);
}

/// 测试存在的账户返回完整字段
#[tokio::test]
async fn test_existing_account_returned() {
    let account = test_account("acct-1", "Ada").with_email("ada@example.com");
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Found(account)));
    let service = service_with(repo.clone());

    let response = service
        .get_account(Request::new(GetAccountRequest {
            id: "acct-1".into(),
        }))
        .await
        .expect("Lookup should succeed")
        .into_inner();

    let proto = response.account.expect("Account should be set");
    assert_eq!(proto.id, "acct-1");
    assert_eq!(proto.display_name, "Ada");
    assert_eq!(proto.email, "ada@example.com");
    assert!(proto.created_at.is_some());
    assert!(proto.updated_at.is_some());
    assert_eq!(repo.call_count(), 1);
}

/// 测试未设置邮箱时返回空字符串
#[tokio::test]
async fn test_missing_email_serialized_as_empty() {
    let account = test_account("acct-1", "Ada");
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Found(account)));
    let service = service_with(repo);

    let response = service
        .get_account(Request::new(GetAccountRequest {
            id: "acct-1".into(),
        }))
        .await
        .expect("Lookup should succeed")
        .into_inner();

    assert_eq!(response.account.unwrap().email, "");
}

/// 测试不存在的账户返回 NOT_FOUND 且消息含 ID
#[tokio::test]
async fn test_missing_account_returns_not_found() {
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Missing));
    let service = service_with(repo.clone());

    let status = service
        .get_account(Request::new(GetAccountRequest {
            id: "missing".into(),
        }))
        .await
        .expect_err("Missing account must return error");

    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains("missing"));
    assert_eq!(repo.call_count(), 1);
}

/// 测试存储临时故障映射为 UNAVAILABLE
#[tokio::test]
async fn test_transient_failure_maps_to_unavailable() {
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Transient(
        "pool timed out at postgres://prod-secret@db:5432".to_string(),
    )));
    let service = service_with(repo);

    let status = service
        .get_account(Request::new(GetAccountRequest {
            id: "acct-1".into(),
        }))
        .await
        .expect_err("Transient failure must return error");

    assert_eq!(status.code(), Code::Unavailable);
    // 内部细节不可泄漏到客户端
    assert!(!status.message().contains("postgres://"));
    assert!(!status.message().contains("prod-secret"));
}

/// 测试存储内部故障映射为 INTERNAL 且消息脱敏
#[tokio::test]
async fn test_internal_failure_maps_to_internal() {
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Broken(
        "column accounts.password does not exist".to_string(),
    )));
    let service = service_with(repo);

    let status = service
        .get_account(Request::new(GetAccountRequest {
            id: "acct-1".into(),
        }))
        .await
        .expect_err("Broken store must return error");

    assert_eq!(status.code(), Code::Internal);
    assert!(!status.message().contains("password"));
    assert!(!status.message().contains("column"));
}

/// 测试查询是幂等的
#[tokio::test]
async fn test_repeated_lookups_are_idempotent() {
    let account = test_account("acct-1", "Ada");
    let repo = Arc::new(StubAccountRepository::new(StubBehavior::Found(account)));
    let service = service_with(repo.clone());

    for _ in 0..3 {
        let response = service
            .get_account(Request::new(GetAccountRequest {
                id: "acct-1".into(),
            }))
            .await
            .expect("Lookup should succeed")
            .into_inner();
        assert_eq!(response.account.unwrap().display_name, "Ada");
    }

    assert_eq!(repo.call_count(), 3);
}
