//! 账户 gRPC 服务实现

use std::sync::Arc;

use prost_types::Timestamp;
use tonic::{Request, Response, Status};
use tracing::{info, warn};
use vela_bootstrap::RequestTimer;
use vela_common::{AccountId, request_id};

use crate::api::grpc::account_proto::account_service_server::AccountService;
use crate::api::grpc::account_proto::{
    Account as ProtoAccount, GetAccountRequest, GetAccountResponse,
};
use crate::domain::{Account, AccountRepository};

pub struct AccountServiceImpl {
    account_repo: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self { account_repo }
    }

    fn account_to_proto(&self, account: &Account) -> ProtoAccount {
        ProtoAccount {
            id: account.id.to_string(),
            display_name: account.display_name.clone(),
            // 未设置邮箱时传空字符串
            email: account.email.clone().unwrap_or_default(),
            created_at: Some(to_proto_timestamp(account.created_at)),
            updated_at: Some(to_proto_timestamp(account.updated_at)),
        }
    }
}

#[tonic::async_trait]
impl AccountService for AccountServiceImpl {
    async fn get_account(
        &self,
        request: Request<GetAccountRequest>,
    ) -> Result<Response<GetAccountResponse>, Status> {
        let request_id = request_id();
        let timer = RequestTimer::new("AccountService", "GetAccount");
        let req = request.into_inner();

        let account_id = match AccountId::new(req.id) {
            Ok(id) => id,
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    error = %e,
                    elapsed_ms = timer.elapsed_ms(),
                    "Rejected malformed account id"
                );
                timer.finish("invalid_argument");
                return Err(Status::invalid_argument(format!(
                    "Invalid account id: {}",
                    e
                )));
            }
        };

        match self.account_repo.find_by_id(&account_id).await {
            Ok(Some(account)) => {
                info!(
                    request_id = %request_id,
                    account_id = %account_id,
                    elapsed_ms = timer.elapsed_ms(),
                    "Account found"
                );
                timer.finish("ok");
                Ok(Response::new(GetAccountResponse {
                    account: Some(self.account_to_proto(&account)),
                }))
            }
            Ok(None) => {
                info!(
                    request_id = %request_id,
                    account_id = %account_id,
                    elapsed_ms = timer.elapsed_ms(),
                    "Account not found"
                );
                timer.finish("not_found");
                Err(Status::not_found(format!(
                    "Account not found: {}",
                    account_id
                )))
            }
            Err(e) => {
                warn!(
                    request_id = %request_id,
                    account_id = %account_id,
                    error = %e,
                    elapsed_ms = timer.elapsed_ms(),
                    "Account lookup failed"
                );
                let label = if e.is_transient() {
                    "unavailable"
                } else {
                    "internal"
                };
                timer.finish(label);
                Err(Status::from(e))
            }
        }
    }
}

fn to_proto_timestamp(dt: chrono::DateTime<chrono::Utc>) -> Timestamp {
    Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}
