//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::dto::AuthorPayload;
use crate::http::handlers::author_handler::{ExistResponse, IdResponse};
use crate::http::handlers::health_handler::HealthResponse;
use common::{ErrorBody, ErrorResponse};
use domain::Author;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::http::handlers::author_handler::list_authors,
        crate::http::handlers::author_handler::get_author,
        crate::http::handlers::author_handler::author_exists,
        crate::http::handlers::author_handler::create_author,
        crate::http::handlers::author_handler::update_author,
        crate::http::handlers::author_handler::delete_author,
        crate::http::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            Author,
            AuthorPayload,
            IdResponse,
            ExistResponse,
            HealthResponse,
            ErrorResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Authors", description = "Author management endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
