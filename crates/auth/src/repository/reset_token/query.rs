use crate::{
    abstract_trait::reset_token::ResetTokenQueryRepositoryTrait,
    models::reset_token::ResetToken as ResetTokenModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ResetTokenQueryRepository {
    db: ConnectionPool,
}

impl ResetTokenQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResetTokenQueryRepositoryTrait for ResetTokenQueryRepository {
    async fn find_by_token_id(
        &self,
        token_id: &str,
    ) -> Result<Option<ResetTokenModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        match sqlx::query_as::<_, ResetTokenModel>(
            r#"
            SELECT id, token_id, token_hash, user_id, email, created_at,
                   expires_at, used_at, ip_address, user_agent
            FROM password_reset_tokens
            WHERE token_id = $1
            "#,
        )
        .bind(token_id)
        .fetch_optional(&mut *conn)
        .await
        {
            Ok(Some(model)) => {
                info!("✅ Found reset token id={}", model.id);
                Ok(Some(model))
            }
            Ok(None) => {
                info!("🔍 No reset token found for token_id={}", token_id);
                Ok(None)
            }
            Err(e) => {
                error!("❌ Query failed for reset token lookup: {:?}", e);
                Err(RepositoryError::from(e))
            }
        }
    }
}
