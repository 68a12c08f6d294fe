//! gRPC 服务实现

mod account_service;

pub use account_service::AccountServiceImpl;

// Proto 生成的代码模块
pub mod account_proto {
    tonic::include_proto!("vela.account.v1");

    /// File descriptor set for gRPC reflection
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("iam_account_descriptor");
}
