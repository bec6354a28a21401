//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage adapters and transports convert to and from the types defined here.

pub mod author;
pub mod constants;
pub mod error;

pub use author::Author;
pub use constants::*;
pub use error::DomainError;
