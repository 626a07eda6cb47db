mod put;

#[cfg(feature = "mock")]
pub mod mock;

pub use put::JSON_CONTENT_TYPE;

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Puts the provided content into the bucket at the provided key.
    #[tracing::instrument(skip(self, content), fields(content_length = content.len()))]
    pub async fn put(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> anyhow::Result<()> {
        put::put(&self.inner, bucket, key, content, content_type).await
    }
}
