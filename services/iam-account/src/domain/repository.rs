//! 账户 Repository trait

use async_trait::async_trait;
use vela_common::AccountId;
use vela_errors::AppResult;

use crate::domain::Account;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// 根据 ID 查找账户
    ///
    /// 账户不存在返回 Ok(None)，存储层故障返回 Err。
    async fn find_by_id(&self, id: &AccountId) -> AppResult<Option<Account>>;
}
