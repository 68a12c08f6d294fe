//! gRPC 生成代码

pub mod account {
    tonic::include_proto!("vela.account.v1");
}
