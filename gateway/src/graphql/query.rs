//! GraphQL 查询解析器

use std::sync::Arc;
use std::time::Instant;

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use tracing::{info, warn};
use vela_bootstrap::record_graphql_request;

use crate::client::AccountApi;
use crate::error::ClientError;
use crate::graphql::types::Account;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// 按 ID 查询账户
    ///
    /// 账户不存在时字段为 null，错误通过 `errors` 数组返回。
    async fn account(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Account>> {
        let api = ctx.data::<Arc<dyn AccountApi>>()?;
        let start = Instant::now();

        match api.get_account(id.as_str()).await {
            Ok(account) => {
                let elapsed = elapsed_ms(start);
                record_graphql_request("account", "ok", elapsed);
                info!(
                    account_id = %id.as_str(),
                    elapsed_ms = elapsed,
                    "Account resolved"
                );
                Ok(Some(account.into()))
            }
            Err(e) => {
                let outcome = match &e {
                    ClientError::InvalidInput(_) => "invalid_input",
                    ClientError::NotFound(_) => "not_found",
                    ClientError::Unavailable => "unavailable",
                    ClientError::Internal => "internal",
                };
                let elapsed = elapsed_ms(start);
                record_graphql_request("account", outcome, elapsed);
                warn!(
                    account_id = %id.as_str(),
                    outcome,
                    elapsed_ms = elapsed,
                    "Account resolution failed"
                );
                Err(e.extend())
            }
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
