//! The outbound ports the ingestion service writes through

use crate::domain::models::{IngestErr, IngestedComment};
use models_comment::{CommentKey, CommentRecord};

/// Durable storage for the unmodified request bodies
#[cfg_attr(test, mockall::automock)]
pub trait RawPayloadStore: Send + Sync + 'static {
    /// Stores `body` verbatim under the key's object path and returns the full
    /// `s3://` path it was written to
    fn put_raw_payload(
        &self,
        key: &CommentKey,
        body: &[u8],
    ) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Storage of the normalized [CommentRecord]s
#[cfg_attr(test, mockall::automock)]
pub trait CommentRepo: Send + Sync + 'static {
    /// Unconditional upsert keyed by `tenant_id` and `uuid`
    fn save_comment(&self, record: &CommentRecord) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Turns one raw request body into a stored comment, or the reason it was not stored
pub trait CommentIngestService: Send + Sync + 'static {
    /// Validates the raw request body and persists it to both stores
    fn ingest(
        &self,
        raw_body: &[u8],
    ) -> impl Future<Output = Result<IngestedComment, IngestErr>> + Send;
}
