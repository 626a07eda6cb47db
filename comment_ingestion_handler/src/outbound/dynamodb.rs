use dynamodb_client::Comments;
use models_comment::CommentRecord;

use crate::domain::ports::CommentRepo;

impl CommentRepo for Comments {
    async fn save_comment(&self, record: &CommentRecord) -> anyhow::Result<()> {
        tracing::info!(
            table=%self.table(),
            tenant_id=%record.tenant_id,
            uuid=%record.uuid,
            "saving comment to dynamodb"
        );
        self.put_comment(record).await
    }
}
