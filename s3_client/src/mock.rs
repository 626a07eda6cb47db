//! A [mockall::mock] stand-in for [crate::S3] so callers can assert on what they put
use mockall::mock;

mock! {
    pub S3 {
        pub async fn put(
            &self,
            bucket: &str,
            key: &str,
            content: &[u8],
            content_type: &str,
        ) -> anyhow::Result<()>;
    }
}
