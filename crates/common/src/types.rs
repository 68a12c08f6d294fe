//! 通用类型定义

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 账户 ID 的最大长度（字节）
pub const MAX_ACCOUNT_ID_LEN: usize = 64;

/// 账户 ID
///
/// 不透明标识符：非空、最长 64 字节、仅允许 ASCII 字母数字和 `-`、`_`。
/// 创建时校验，校验通过后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
#[serde(try_from = "String")]
pub struct AccountId(String);

/// 账户 ID 校验错误
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AccountIdError {
    #[display("account id must not be empty")]
    Empty,
    #[display("account id exceeds {MAX_ACCOUNT_ID_LEN} bytes")]
    TooLong,
    #[display("account id contains invalid character {_0:?}")]
    InvalidChar(#[error(not(source))] char),
}

impl AccountId {
    /// 创建并校验账户 ID
    pub fn new(id: impl Into<String>) -> Result<Self, AccountIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(AccountIdError::Empty);
        }
        if id.len() > MAX_ACCOUNT_ID_LEN {
            return Err(AccountIdError::TooLong);
        }
        if let Some(c) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(AccountIdError::InvalidChar(c));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
