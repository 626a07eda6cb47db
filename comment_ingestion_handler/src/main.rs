use anyhow::Context;
use comment_ingestion_handler::{
    config::{Config, load_aws_config},
    domain::service::CommentIngestServiceImpl,
    inbound::api_gateway::handler,
    outbound::s3::S3RawPayloadStore,
};
use dynamodb_client::DynamodbClient;
use entrypoint::Entrypoint;
use lambda_http::{Error, Request, run, service_fn, tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let env = Entrypoint::default().init().environment();

    tracing::trace!(environment=%env, "initiating lambda");

    let config = Config::from_env().context("lambda configuration is incomplete")?;

    tracing::trace!(config=?config, "initialized config");

    let aws_config = load_aws_config().await;
    let payloads = S3RawPayloadStore::new(
        s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config)),
        config.bucket_ingesta_name,
    );
    let records = DynamodbClient::new(&aws_config, config.table_name.as_ref()).comments;

    tracing::trace!("initialized aws clients");

    let service = &CommentIngestServiceImpl::new(payloads, records);

    let func = service_fn(move |event: Request| async move { handler(service, event).await });

    run(func).await
}
