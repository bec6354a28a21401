//! Domain-level constants.
//!
//! Names shared by every persistence backend so that a record written by one
//! adapter has the same shape as a record written by another.

// =============================================================================
// Persistence
// =============================================================================

/// Collection (document store) / table (wide-column store) holding authors
pub const AUTHORS_COLLECTION: &str = "authors";

/// Default database / keyspace name
pub const DEFAULT_DATABASE: &str = "mosha";

