//! API layer - gRPC service implementations

pub mod grpc;
