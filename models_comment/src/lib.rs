//! Shared types for tenant comments: the stored record, the object key of the
//! raw payload, and the bodies exchanged with the api.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

mod api;

pub use api::{CommentCreatedResponse, CreateCommentRequest};

/// The normalized comment as it is stored in the comments table.
/// `tenant_id` is the partition key and `uuid` the sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// The tenant that owns the comment
    pub tenant_id: String,
    /// Generated identifier, unique within the tenant
    pub uuid: String,
    /// The comment text, verbatim
    pub comentario: String,
}

/// Identifies one ingested comment across both stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentKey {
    tenant_id: String,
    uuid: Uuid,
}

impl CommentKey {
    /// Generates a fresh random (v4) identifier for the tenant
    pub fn generate(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            uuid: Uuid::new_v4(),
        }
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// The object key of the raw payload, `{tenant_id}/{uuid}.json`
    pub fn s3_key(&self) -> String {
        format!("{}/{}.json", self.tenant_id, self.uuid)
    }

    /// The full location of the raw payload, `s3://{bucket}/{tenant_id}/{uuid}.json`
    pub fn s3_path(&self, bucket: &str) -> String {
        format!("s3://{}/{}", bucket, self.s3_key())
    }

    /// Builds the table record for this key
    pub fn into_record(self, comentario: impl Into<String>) -> CommentRecord {
        CommentRecord {
            tenant_id: self.tenant_id,
            uuid: self.uuid.to_string(),
            comentario: comentario.into(),
        }
    }
}

impl Display for CommentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.tenant_id, self.uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_key_is_tenant_scoped() {
        let key = CommentKey::generate("t1");
        assert_eq!(key.s3_key(), format!("t1/{}.json", key.uuid()));
        assert_eq!(
            key.s3_path("ingesta"),
            format!("s3://ingesta/t1/{}.json", key.uuid())
        );
    }

    #[test]
    fn generated_ids_are_v4_and_distinct() {
        let a = CommentKey::generate("t1");
        let b = CommentKey::generate("t1");
        assert_eq!(a.uuid().get_version_num(), 4);
        assert_ne!(a.uuid(), b.uuid());
        assert_ne!(a.s3_key(), b.s3_key());
    }

    #[test]
    fn record_carries_the_same_uuid() {
        let key = CommentKey::generate("t1");
        let uuid = key.uuid();
        let record = key.into_record("hello");
        assert_eq!(
            record,
            CommentRecord {
                tenant_id: "t1".to_string(),
                uuid: uuid.to_string(),
                comentario: "hello".to_string(),
            }
        );
    }
}
