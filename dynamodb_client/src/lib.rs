use aws_config::SdkConfig;

mod comment;

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    pub comments: Comments,
}

impl DynamodbClient {
    pub fn new(aws_config: &SdkConfig, comments_table: impl Into<String>) -> Self {
        Self {
            comments: Comments {
                table: comments_table.into(),
                client: aws_sdk_dynamodb::Client::new(aws_config),
            },
        }
    }
}

/// Access to the comments table, keyed by `tenant_id` (hash) and `uuid` (range)
#[derive(Debug, Clone)]
pub struct Comments {
    table: String,
    client: aws_sdk_dynamodb::Client,
}

impl Comments {
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Writes the record, replacing any item with the same key
    #[tracing::instrument(skip(self), fields(table = %self.table))]
    pub async fn put_comment(&self, record: &models_comment::CommentRecord) -> anyhow::Result<()> {
        comment::put_comment(&self.client, &self.table, record).await
    }
}
