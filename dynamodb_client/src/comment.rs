use anyhow::Context;
use aws_sdk_dynamodb::Client;
use models_comment::CommentRecord;

#[tracing::instrument(skip(client))]
pub(crate) async fn put_comment(
    client: &Client,
    table: &str,
    record: &CommentRecord,
) -> anyhow::Result<()> {
    let item = serde_dynamo::to_item(record).context("failed to serialize comment to item")?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .send()
        .await
        .context("failed to insert comment into DynamoDB")?;

    Ok(())
}
