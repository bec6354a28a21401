//! Repository layer composing storage and the quote cascade.

mod author_repository;

pub use author_repository::{AuthorRepository, CascadingAuthorRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use author_repository::MockAuthorRepository;
