//! 账户实体测试

use iam_account::domain::Account;
use vela_common::AccountId;

/// 测试辅助：创建测试账户
fn create_test_account(id: &str) -> Account {
    let id = AccountId::new(id).expect("Valid account id");
    Account::new(id, "Test Account")
}

/// 测试账户实体创建
#[test]
fn test_account_creation() {
    let account = create_test_account("acct-1");

    assert_eq!(account.id.as_str(), "acct-1");
    assert_eq!(account.display_name, "Test Account");
    assert!(account.email.is_none());
    assert_eq!(account.created_at, account.updated_at);
}

/// 测试设置邮箱
#[test]
fn test_account_with_email() {
    let account = create_test_account("acct-1").with_email("ada@example.com");

    assert_eq!(account.email.as_deref(), Some("ada@example.com"));
}

/// 测试重命名更新时间戳
#[test]
fn test_rename_bumps_updated_at() {
    let mut account = create_test_account("acct-1");
    let created = account.created_at;

    account.rename("Renamed");

    assert_eq!(account.display_name, "Renamed");
    assert_eq!(account.created_at, created);
    assert!(account.updated_at >= created);
}

/// 测试邮箱变更
#[test]
fn test_update_email() {
    let mut account = create_test_account("acct-1").with_email("old@example.com");

    account.update_email(Some("new@example.com".to_string()));
    assert_eq!(account.email.as_deref(), Some("new@example.com"));

    account.update_email(None);
    assert!(account.email.is_none());
}
