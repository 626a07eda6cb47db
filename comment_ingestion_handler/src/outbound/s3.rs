use models_comment::CommentKey;
use s3_client::JSON_CONTENT_TYPE;

#[cfg(test)]
use s3_client::mock::MockS3 as S3;
#[cfg(not(test))]
use s3_client::S3;

use crate::{config::BucketIngestaName, domain::ports::RawPayloadStore};

/// Pushes raw request bodies into the ingestion bucket
pub struct S3RawPayloadStore {
    s3: S3,
    bucket: BucketIngestaName,
}

impl S3RawPayloadStore {
    pub fn new(s3: S3, bucket: BucketIngestaName) -> Self {
        Self { s3, bucket }
    }
}

impl RawPayloadStore for S3RawPayloadStore {
    async fn put_raw_payload(&self, key: &CommentKey, body: &[u8]) -> anyhow::Result<String> {
        let s3_key = key.s3_key();
        tracing::info!(bucket=%self.bucket, key=%s3_key, "pushing raw payload to s3");

        self.s3
            .put(&self.bucket, &s3_key, body, JSON_CONTENT_TYPE)
            .await?;

        Ok(key.s3_path(&self.bucket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cool_asserts::assert_matches;

    const BODY: &[u8] = br#"{"tenant_id":"t1","comentario":"hello"}"#;

    #[tokio::test]
    async fn it_puts_the_raw_body_as_json_under_the_tenant() {
        let key = CommentKey::generate("t1");
        let expected_key = format!("t1/{}.json", key.uuid());

        let mut s3 = S3::default();
        s3.expect_put()
            .withf(move |bucket, s3_key, content, content_type| {
                bucket.to_string() == "ingesta-raw"
                    && s3_key.to_string() == expected_key
                    && content.to_vec() == BODY
                    && content_type.to_string() == "application/json"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let store = S3RawPayloadStore::new(s3, BucketIngestaName::from_value("ingesta-raw"));

        let s3_path = store.put_raw_payload(&key, BODY).await.unwrap();

        assert_eq!(s3_path, format!("s3://ingesta-raw/t1/{}.json", key.uuid()));
    }

    #[tokio::test]
    async fn it_surfaces_put_failures() {
        let mut s3 = S3::default();
        s3.expect_put()
            .times(1)
            .returning(|_, _, _, _| Err(anyhow::anyhow!("AccessDenied")));

        let store = S3RawPayloadStore::new(s3, BucketIngestaName::from_value("ingesta-raw"));

        let res = store
            .put_raw_payload(&CommentKey::generate("t1"), BODY)
            .await;

        assert_matches!(res, Err(e) => assert_eq!(e.to_string(), "AccessDenied"));
    }
}
