//! Author handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use common::{AppResult, ErrorResponse};
use domain::Author;

use crate::dto::AuthorPayload;
use crate::http::extractors::ValidatedJson;
use crate::http::state::AppState;

/// Id of the created or deleted author
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IdResponse {
    #[schema(example = "123")]
    pub id: String,
}

/// Existence check result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExistResponse {
    pub exist: bool,
}

/// Create author routes
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/author", post(create_author))
        .route("/api/v1/author/all", get(list_authors))
        .route("/api/v1/author/update", post(update_author))
        .route("/api/v1/author/exist/:id", get(author_exists))
        .route("/api/v1/author/delete/:id", post(delete_author))
        .route("/api/v1/author/:id", get(get_author))
}

/// List all authors
#[utoipa::path(
    get,
    path = "/api/v1/author/all",
    tag = "Authors",
    responses(
        (status = 200, description = "List of all authors", body = Vec<Author>),
        (status = 500, description = "Storage backend error", body = ErrorResponse)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    Ok(Json(state.service.list_authors().await?))
}

/// Get author by id
#[utoipa::path(
    get,
    path = "/api/v1/author/{id}",
    tag = "Authors",
    params(
        ("id" = String, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author", body = Author),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Author>> {
    Ok(Json(state.service.get_author(&id).await?))
}

/// Check whether an author exists
#[utoipa::path(
    get,
    path = "/api/v1/author/exist/{id}",
    tag = "Authors",
    params(
        ("id" = String, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Existence flag", body = ExistResponse)
    )
)]
pub async fn author_exists(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ExistResponse> {
    Json(ExistResponse {
        exist: state.service.author_exists(&id).await,
    })
}

/// Create author
#[utoipa::path(
    post,
    path = "/api/v1/author",
    tag = "Authors",
    request_body = AuthorPayload,
    responses(
        (status = 200, description = "Author created", body = IdResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Author id already taken", body = ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthorPayload>,
) -> AppResult<Json<IdResponse>> {
    let id = state.service.create_author(payload.into_author()?).await?;
    Ok(Json(IdResponse { id }))
}

/// Update author (full replace of name and picture URL)
#[utoipa::path(
    post,
    path = "/api/v1/author/update",
    tag = "Authors",
    request_body = AuthorPayload,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthorPayload>,
) -> AppResult<Json<Author>> {
    Ok(Json(state.service.update_author(payload.into_author()?).await?))
}

/// Delete author and its quotes
#[utoipa::path(
    post,
    path = "/api/v1/author/delete/{id}",
    tag = "Authors",
    params(
        ("id" = String, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author and quotes deleted", body = IdResponse),
        (status = 404, description = "Author not found", body = ErrorResponse),
        (status = 502, description = "Quotes not deleted, author kept", body = ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<IdResponse>> {
    state.service.delete_author(&id).await?;
    Ok(Json(IdResponse { id }))
}
