//! Author payload shared by the HTTP and gRPC transports.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use common::{AppError, AppResult};
use domain::Author;

/// Author create / update request with validation
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    /// Author id (generated on create when empty)
    #[serde(default)]
    #[schema(example = "123")]
    pub id: String,
    /// Display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Picture URL
    #[serde(default)]
    #[schema(example = "http://example.com/john-doe.jpg")]
    pub pic_url: String,
}

impl AuthorPayload {
    /// Validate and convert into the domain entity.
    pub fn into_author(self) -> AppResult<Author> {
        self.validate().map_err(validation_error)?;
        Ok(Author::with_id(self.id, self.name, self.pic_url))
    }
}

impl From<proto::authorservice::Author> for AuthorPayload {
    fn from(author: proto::authorservice::Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            pic_url: author.pic_url,
        }
    }
}

/// Turn validator output into an `AppError` carrying the first message.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .values()
        .next()
        .and_then(|errors| errors.first())
        .and_then(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| "Validation failed".to_string());
    AppError::validation(message)
}
