//! 账户实体

use chrono::{DateTime, Utc};
use vela_common::AccountId;

/// 账户实体
///
/// 读取路径上的核心聚合。时间戳由持久层维护，
/// 内存实现中由构造函数和变更方法维护。
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub display_name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: AccountId, display_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            display_name: display_name.into(),
            email: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 设置联系邮箱（构建用）
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// 修改显示名称
    pub fn rename(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
        self.updated_at = Utc::now();
    }

    /// 更新联系邮箱
    pub fn update_email(&mut self, email: Option<String>) {
        self.email = email;
        self.updated_at = Utc::now();
    }
}
