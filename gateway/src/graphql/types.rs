//! GraphQL 对象类型

use async_graphql::{ID, SimpleObject};
use chrono::{DateTime, Utc};

use crate::client;

/// 账户
#[derive(Debug, Clone, SimpleObject)]
pub struct Account {
    /// 账户 ID
    pub id: ID,
    /// 显示名称
    pub display_name: String,
    /// 联系邮箱
    pub email: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl From<client::Account> for Account {
    fn from(account: client::Account) -> Self {
        Self {
            id: account.id.into(),
            display_name: account.display_name,
            email: account.email,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
