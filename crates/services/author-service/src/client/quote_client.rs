//! gRPC client for the quote service.

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;
use tracing::{debug, info, warn};

use common::{AppError, AppResult, GrpcClientConfig};
use proto::quoteservice::DeleteQuotesByAuthorRequest;
use proto::QuoteServiceClient;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Removes the quotes owned by an author before the author itself goes away.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait QuoteCascade: Send + Sync {
    /// Delete every quote of the author; any failure leaves the author in place
    async fn delete_author_quotes(&self, author_id: &str) -> AppResult<()>;
}

/// gRPC client wrapper for the quote service.
#[derive(Clone)]
pub struct QuoteClient {
    client: QuoteServiceClient<Channel>,
}

impl QuoteClient {
    /// Create a client whose channel connects on first use.
    pub fn connect_lazy(config: &GrpcClientConfig) -> AppResult<Self> {
        let endpoint = Endpoint::from_shared(config.endpoint.clone()).map_err(|e| {
            AppError::config(format!("invalid quote service url {:?}: {}", config.endpoint, e))
        })?;
        info!("Quote service client targets {}", config.endpoint);

        Ok(Self {
            client: QuoteServiceClient::new(endpoint.connect_lazy()),
        })
    }
}

#[async_trait]
impl QuoteCascade for QuoteClient {
    async fn delete_author_quotes(&self, author_id: &str) -> AppResult<()> {
        debug!("Deleting quotes of author {}", author_id);
        let request = tonic::Request::new(DeleteQuotesByAuthorRequest {
            author_id: author_id.to_string(),
        });

        let mut client = self.client.clone();
        let result = client
            .delete_all_quotes_by_author(request)
            .await
            .map(|response| response.into_inner().success);

        cascade_outcome(author_id, result)
    }
}

/// Fold the remote reply into the cascade result. A reply that reports
/// `success == false` counts as a failure.
fn cascade_outcome(author_id: &str, result: Result<bool, Status>) -> AppResult<()> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => {
            warn!("Quote service refused to delete quotes of author {}", author_id);
            Err(AppError::cascade(format!(
                "quotes of author {author_id:?} were not deleted"
            )))
        }
        Err(status) => {
            warn!(
                "Quote service call for author {} failed: {:?} {}",
                author_id,
                status.code(),
                status.message()
            );
            Err(AppError::cascade(format!(
                "quotes of author {author_id:?} were not deleted: {:?}: {}",
                status.code(),
                status.message()
            )))
        }
    }
}
