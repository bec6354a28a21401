//! gRPC clients for collaborating services.

mod quote_client;

pub use quote_client::{QuoteCascade, QuoteClient};

#[cfg(any(test, feature = "test-utils"))]
pub use quote_client::MockQuoteCascade;
