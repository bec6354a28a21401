//! gRPC implementation for AuthorService.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::dto::AuthorPayload;
use crate::service::AuthorService;
use domain::Author;
use proto::authorservice::{
    author_service_server::AuthorService as AuthorServiceProto, Author as ProtoAuthor,
    AuthorExistsRequest, AuthorExistsResponse, CreateAuthorRequest, DeleteAuthorRequest,
    DeleteAuthorResponse, GetAuthorRequest, ListAuthorsRequest, ListAuthorsResponse,
    UpdateAuthorRequest,
};

/// gRPC service wrapper for AuthorService.
pub struct AuthorGrpcService {
    service: Arc<dyn AuthorService>,
}

impl AuthorGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn AuthorService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl AuthorServiceProto for AuthorGrpcService {
    async fn get_author(
        &self,
        request: Request<GetAuthorRequest>,
    ) -> Result<Response<ProtoAuthor>, Status> {
        let req = request.into_inner();

        let author = self.service.get_author(&req.id).await.map_err(Status::from)?;
        Ok(Response::new(author_to_proto(author)))
    }

    async fn list_authors(
        &self,
        _request: Request<ListAuthorsRequest>,
    ) -> Result<Response<ListAuthorsResponse>, Status> {
        let authors = self.service.list_authors().await.map_err(Status::from)?;
        let authors = authors.into_iter().map(author_to_proto).collect();

        Ok(Response::new(ListAuthorsResponse { authors }))
    }

    async fn create_author(
        &self,
        request: Request<CreateAuthorRequest>,
    ) -> Result<Response<ProtoAuthor>, Status> {
        let mut author = proto_to_author(request.into_inner().author)?;
        author.ensure_id();

        let id = self
            .service
            .create_author(author.clone())
            .await
            .map_err(Status::from)?;
        Ok(Response::new(author_to_proto(Author { id, ..author })))
    }

    async fn update_author(
        &self,
        request: Request<UpdateAuthorRequest>,
    ) -> Result<Response<ProtoAuthor>, Status> {
        let author = proto_to_author(request.into_inner().author)?;

        let author = self
            .service
            .update_author(author)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(author_to_proto(author)))
    }

    async fn delete_author(
        &self,
        request: Request<DeleteAuthorRequest>,
    ) -> Result<Response<DeleteAuthorResponse>, Status> {
        let req = request.into_inner();

        self.service.delete_author(&req.id).await.map_err(Status::from)?;
        Ok(Response::new(DeleteAuthorResponse { success: true }))
    }

    async fn author_exists(
        &self,
        request: Request<AuthorExistsRequest>,
    ) -> Result<Response<AuthorExistsResponse>, Status> {
        let req = request.into_inner();

        let exists = self.service.author_exists(&req.id).await;
        Ok(Response::new(AuthorExistsResponse { exists }))
    }
}

/// Validate an incoming proto Author and convert it to the domain entity.
fn proto_to_author(author: Option<ProtoAuthor>) -> Result<Author, Status> {
    let author = author.ok_or_else(|| Status::invalid_argument("author is required"))?;
    AuthorPayload::from(author)
        .into_author()
        .map_err(Status::from)
}

/// Convert domain Author to proto Author.
fn author_to_proto(author: Author) -> ProtoAuthor {
    ProtoAuthor {
        id: author.id,
        name: author.name,
        pic_url: author.pic_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockQuoteCascade;
    use crate::repository::CascadingAuthorRepository;
    use crate::service::AuthorManager;
    use crate::storage::MemoryStorage;
    use common::AppError;

    fn grpc_service(quotes: MockQuoteCascade) -> AuthorGrpcService {
        let storage = Arc::new(MemoryStorage::with_data(vec![Author::with_id(
            "123",
            "John Doe",
            "http://x/john.jpg",
        )]));
        let repo = Arc::new(CascadingAuthorRepository::new(storage, Arc::new(quotes)));
        AuthorGrpcService::new(Arc::new(AuthorManager::new(repo)))
    }

    fn proto_author(id: &str, name: &str) -> Option<ProtoAuthor> {
        Some(ProtoAuthor {
            id: id.to_string(),
            name: name.to_string(),
            pic_url: String::new(),
        })
    }

    #[test]
    fn test_served_under_authorservice_package() {
        use tonic::server::NamedService;

        assert_eq!(
            <proto::AuthorServiceServer<AuthorGrpcService> as NamedService>::NAME,
            "authorservice.AuthorService"
        );
    }

    #[tokio::test]
    async fn test_get_author() {
        let service = grpc_service(MockQuoteCascade::new());

        let response = service
            .get_author(Request::new(GetAuthorRequest { id: "123".to_string() }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.name, "John Doe");
        assert_eq!(response.pic_url, "http://x/john.jpg");
    }

    #[tokio::test]
    async fn test_get_missing_author() {
        let service = grpc_service(MockQuoteCascade::new());

        let status = service
            .get_author(Request::new(GetAuthorRequest { id: "404".to_string() }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let service = grpc_service(MockQuoteCascade::new());

        let created = service
            .create_author(Request::new(CreateAuthorRequest {
                author: proto_author("", "Jane Roe"),
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(!created.id.is_empty());

        let listed = service
            .list_authors(Request::new(ListAuthorsRequest {}))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(listed.authors.len(), 2);
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let service = grpc_service(MockQuoteCascade::new());

        let status = service
            .create_author(Request::new(CreateAuthorRequest {
                author: proto_author("123", "Impostor"),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), tonic::Code::AlreadyExists);
    }

    #[tokio::test]
    async fn test_create_requires_payload() {
        let service = grpc_service(MockQuoteCascade::new());

        let missing = service
            .create_author(Request::new(CreateAuthorRequest { author: None }))
            .await
            .unwrap_err();
        assert_eq!(missing.code(), tonic::Code::InvalidArgument);

        let blank = service
            .update_author(Request::new(UpdateAuthorRequest {
                author: proto_author("123", ""),
            }))
            .await
            .unwrap_err();
        assert_eq!(blank.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_delete_with_failed_cascade() {
        let mut quotes = MockQuoteCascade::new();
        quotes
            .expect_delete_author_quotes()
            .returning(|_| Err(AppError::cascade("quote service unavailable")));
        let service = grpc_service(quotes);

        let status = service
            .delete_author(Request::new(DeleteAuthorRequest { id: "123".to_string() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::FailedPrecondition);

        let exists = service
            .author_exists(Request::new(AuthorExistsRequest { id: "123".to_string() }))
            .await
            .unwrap()
            .into_inner();
        assert!(exists.exists);
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut quotes = MockQuoteCascade::new();
        quotes.expect_delete_author_quotes().returning(|_| Ok(()));
        let service = grpc_service(quotes);

        let response = service
            .delete_author(Request::new(DeleteAuthorRequest { id: "123".to_string() }))
            .await
            .unwrap()
            .into_inner();
        assert!(response.success);

        let status = service
            .get_author(Request::new(GetAuthorRequest { id: "123".to_string() }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
    }
}
