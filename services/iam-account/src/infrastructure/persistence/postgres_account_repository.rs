//! PostgreSQL 账户 Repository 实现

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use vela_adapter_postgres::map_sqlx_error;
use vela_bootstrap::DbQueryTimer;
use vela_common::AccountId;
use vela_errors::{AppError, AppResult};

use crate::domain::{Account, AccountRepository};

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_id(&self, id: &AccountId) -> AppResult<Option<Account>> {
        let timer = DbQueryTimer::new("select", "accounts");

        let result = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, display_name, email, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await;

        let row = match result {
            Ok(row) => {
                timer.finish(true);
                row
            }
            Err(e) => {
                timer.finish(false);
                return Err(map_sqlx_error("find account by id", e));
            }
        };

        debug!(account_id = %id, found = row.is_some(), "Account lookup");

        match row {
            Some(r) => Ok(Some(r.into_account().map_err(|e| AppError::database(e))?)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: String,
    display_name: String,
    email: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, String> {
        let id = AccountId::new(self.id.as_str())
            .map_err(|e| format!("Invalid account id in database {}: {}", self.id, e))?;

        Ok(Account {
            id,
            display_name: self.display_name,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
