use lambda_http::{
    Body, Error, Request, Response,
    http::{StatusCode, header},
};
use models_comment::CommentCreatedResponse;

use crate::domain::{
    models::{CREATED_MESSAGE, IngestErr, IngestedComment},
    ports::CommentIngestService,
};

/// Handles one api gateway proxy request
#[tracing::instrument(skip_all)]
pub async fn handler<S: CommentIngestService>(
    service: &S,
    event: Request,
) -> Result<Response<Body>, Error> {
    let raw_body: &[u8] = event.body();

    match service.ingest(raw_body).await {
        Ok(ingested) => {
            tracing::info!(comment=%ingested.key, s3_path=%ingested.s3_path, "comment ingested");
            created(ingested)
        }
        Err(IngestErr::Validation(e)) => {
            tracing::info!(reason=%e, "rejected comment");
            // 400s carry no cors header
            json_response(StatusCode::BAD_REQUEST, &e.to_string(), false)
        }
        Err(e) => {
            tracing::error!(error=?e, "failed to ingest comment");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Error interno del servidor: {e}"),
                true,
            )
        }
    }
}

fn created(ingested: IngestedComment) -> Result<Response<Body>, Error> {
    let body = CommentCreatedResponse {
        message: CREATED_MESSAGE.to_string(),
        uuid: ingested.key.uuid().to_string(),
        s3_path: ingested.s3_path,
    };
    json_response(StatusCode::CREATED, &body, true)
}

fn json_response<T: serde::Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
    cors: bool,
) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json");
    if cors {
        builder = builder.header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    }
    Ok(builder.body(Body::from(serde_json::to_string(body)?))?)
}
