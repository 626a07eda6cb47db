use models_comment::CommentKey;
use thiserror::Error;

/// Message returned with every 201
pub const CREATED_MESSAGE: &str = "Comentario creado y registrado en ingesta.";

/// The outcome of a successful ingestion
#[derive(Debug, Clone)]
pub struct IngestedComment {
    pub key: CommentKey,
    /// `s3://{bucket}/{tenant_id}/{uuid}.json`
    pub s3_path: String,
}

/// The request was rejected before anything was written
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No se recibió body.")]
    NoBody,
    #[error("Faltan \"tenant_id\" o \"comentario\".")]
    MissingFields,
}

/// One of the two stores failed
#[derive(Debug, Error)]
pub enum DependencyError {
    /// nothing was persisted
    #[error("failed to store raw payload: {0:#}")]
    RawPayload(anyhow::Error),
    /// the raw payload at `s3_key` was already written and is left in place
    #[error("failed to store comment record ({s3_key} was kept): {err:#}")]
    Record { s3_key: String, err: anyhow::Error },
}

#[derive(Debug, Error)]
pub enum UnexpectedError {
    #[error("{0}")]
    MalformedJson(#[from] serde_json::Error),
    /// valid JSON, but an array, string, number or null
    #[error("expected a JSON object body")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum IngestErr {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Dependency(#[from] DependencyError),
    #[error(transparent)]
    Unexpected(#[from] UnexpectedError),
}
