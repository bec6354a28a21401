//! gRPC layer.

mod author_grpc;

pub use author_grpc::AuthorGrpcService;
