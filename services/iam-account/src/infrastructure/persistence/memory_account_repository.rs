//! 内存账户 Repository 实现
//!
//! 用于测试和本地演示，无持久化保证。

use async_trait::async_trait;
use dashmap::DashMap;
use vela_common::AccountId;
use vela_errors::AppResult;

use crate::domain::{Account, AccountRepository};

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<AccountId, Account>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置账户
    pub fn insert(&self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_id(&self, id: &AccountId) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(id).map(|entry| entry.value().clone()))
    }
}
