//! Author domain entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique, stable identifier (generated when left empty on create)
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "123"))]
    pub id: String,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Picture URL
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "http://example.com/john-doe.jpg"))]
    pub pic_url: String,
}

impl Author {
    /// Create an author with a freshly generated id
    pub fn new(name: impl Into<String>, pic_url: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name, pic_url)
    }

    /// Create an author keeping the supplied id
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pic_url: pic_url.into(),
        }
    }

    /// Check if an id was supplied
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Assign a generated id unless one is already present
    pub fn ensure_id(&mut self) {
        if !self.has_id() {
            self.id = generate_id();
        }
    }
}

/// Generate a new unique author id
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_id() {
        let author = Author::new("John Doe", "http://example.com/john-doe.jpg");

        assert!(author.has_id());
        assert!(Uuid::parse_str(&author.id).is_ok());
        assert_eq!(author.name, "John Doe");
        assert_eq!(author.pic_url, "http://example.com/john-doe.jpg");
    }

    #[test]
    fn test_new_ids_are_unique() {
        let first = Author::new("John Doe", "");
        let second = Author::new("John Doe", "");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_with_id_keeps_id() {
        let author = Author::with_id("123", "John Doe", "http://example.com/john-doe.jpg");
        assert_eq!(author.id, "123");
    }

    #[test]
    fn test_ensure_id() {
        let mut blank = Author::with_id("  ", "John Doe", "");
        blank.ensure_id();
        assert!(blank.has_id());

        let mut supplied = Author::with_id("123", "John Doe", "");
        supplied.ensure_id();
        assert_eq!(supplied.id, "123");
    }

    #[test]
    fn test_json_shape() {
        let author = Author::with_id("123", "John Doe", "http://x/john.jpg");
        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "123", "name": "John Doe", "picUrl": "http://x/john.jpg"})
        );

        let parsed: Author = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert_eq!(parsed.id, "");
        assert_eq!(parsed.pic_url, "");
    }
}
