use crate::domain::{
    models::{DependencyError, IngestErr, IngestedComment, UnexpectedError, ValidationError},
    ports::{CommentIngestService, CommentRepo, RawPayloadStore},
};
use models_comment::{CommentKey, CreateCommentRequest};
use serde_json::Value;


#[derive(Debug, Clone)]
pub struct CommentIngestServiceImpl<P, R> {
    payloads: P,
    records: R,
}

impl<P, R> CommentIngestServiceImpl<P, R>
where
    P: RawPayloadStore,
    R: CommentRepo,
{
    pub fn new(payloads: P, records: R) -> Self {
        Self { payloads, records }
    }
}

/// Returns the two required fields when both are present and non-empty
fn required_fields(request: CreateCommentRequest) -> Result<(String, String), ValidationError> {
    match (request.tenant_id, request.comentario) {
        (Some(tenant_id), Some(comentario)) if !tenant_id.is_empty() && !comentario.is_empty() => {
            Ok((tenant_id, comentario))
        }
        _ => Err(ValidationError::MissingFields),
    }
}

impl<P, R> CommentIngestService for CommentIngestServiceImpl<P, R>
where
    P: RawPayloadStore,
    R: CommentRepo,
{
    #[tracing::instrument(skip_all, fields(body_length = raw_body.len(), comment = tracing::field::Empty))]
    async fn ingest(&self, raw_body: &[u8]) -> Result<IngestedComment, IngestErr> {
        if raw_body.is_empty() {
            return Err(ValidationError::NoBody.into());
        }

        let body: Value = serde_json::from_slice(raw_body).map_err(UnexpectedError::from)?;
        let Value::Object(object) = body else {
            return Err(UnexpectedError::NotAnObject.into());
        };
        let (tenant_id, comentario) = required_fields(CreateCommentRequest::from(object))?;

        let key = CommentKey::generate(tenant_id);
        tracing::Span::current().record("comment", tracing::field::display(&key));

        // raw copy first, the record only once it is durable
        let s3_path = self
            .payloads
            .put_raw_payload(&key, raw_body)
            .await
            .map_err(DependencyError::RawPayload)?;

        let record = key.clone().into_record(comentario);
        if let Err(err) = self.records.save_comment(&record).await {
            tracing::warn!(s3_path=%s3_path, "raw payload stored but comment record was not");
            return Err(DependencyError::Record {
                s3_key: key.s3_key(),
                err,
            }
            .into());
        }

        Ok(IngestedComment { key, s3_path })
    }
}
