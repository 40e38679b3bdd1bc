use crate::{
    abstract_trait::reset_token::ResetTokenCommandRepositoryTrait,
    domain::requests::reset_token::{CompletePasswordResetRequest, CreateResetTokenRequest},
    models::reset_token::ResetToken as ResetTokenModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

const CREDENTIAL_PROVIDER: &str = "credential";

/// Taken first in `issue_token`; concurrent issuance for one user waits here, so the
/// supersede update of the later transaction sees the earlier one's token.
const LOCK_USER_FOR_ISSUE: &str = "SELECT id FROM users WHERE id = $1 FOR UPDATE";

pub struct ResetTokenCommandRepository {
    db: ConnectionPool,
}

impl ResetTokenCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResetTokenCommandRepositoryTrait for ResetTokenCommandRepository {
    async fn issue_token(
        &self,
        request: &CreateResetTokenRequest,
    ) -> Result<ResetTokenModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query(LOCK_USER_FOR_ISSUE)
            .bind(request.user_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Error locking user_id {} for token issuance: {:?}",
                    request.user_id, err
                );
                RepositoryError::from(err)
            })?;

        let superseded = sqlx::query(
            r#"
            UPDATE password_reset_tokens
            SET used_at = $2
            WHERE user_id = $1 AND used_at IS NULL
            "#,
        )
        .bind(request.user_id)
        .bind(request.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Error superseding reset tokens for user_id {}: {:?}",
                request.user_id, err
            );
            RepositoryError::from(err)
        })?;

        let result = sqlx::query_as::<_, ResetTokenModel>(
            r#"
            INSERT INTO password_reset_tokens
                (token_id, token_hash, user_id, email, created_at, expires_at, ip_address, user_agent)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, token_id, token_hash, user_id, email, created_at,
                      expires_at, used_at, ip_address, user_agent
            "#,
        )
        .bind(&request.token_id)
        .bind(&request.token_hash)
        .bind(request.user_id)
        .bind(&request.email)
        .bind(request.created_at)
        .bind(request.expires_at)
        .bind(&request.ip_address)
        .bind(&request.user_agent)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Error inserting reset token for user_id {}: {:?}",
                request.user_id, err
            );
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit reset token: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Issued reset token id={} for user_id {} ({} superseded)",
            result.id,
            result.user_id,
            superseded.rows_affected()
        );

        Ok(result)
    }

    async fn complete_reset(
        &self,
        request: &CompletePasswordResetRequest,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::from(e)
        })?;

        let account = sqlx::query(
            r#"
            UPDATE accounts
            SET password = $2, updated_at = $3
            WHERE user_id = $1 AND provider_id = $4
            "#,
        )
        .bind(request.user_id)
        .bind(&request.password_hash)
        .bind(request.used_at)
        .bind(CREDENTIAL_PROVIDER)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Error updating password for user_id {}: {:?}",
                request.user_id, err
            );
            RepositoryError::from(err)
        })?;

        if account.rows_affected() == 0 {
            warn!(
                "⚠️ No credential account for user_id {}, rolling back",
                request.user_id
            );
            return Err(RepositoryError::NotFound);
        }

        sqlx::query(
            r#"
            UPDATE users
            SET must_change_password = FALSE, updated_at = $2
            WHERE id = $1
            "#,
        )
        .bind(request.user_id)
        .bind(request.used_at)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Error clearing must_change_password for user_id {}: {:?}",
                request.user_id, err
            );
            RepositoryError::from(err)
        })?;

        let consumed = sqlx::query(
            r#"
            UPDATE password_reset_tokens
            SET used_at = $2
            WHERE id = $1 AND used_at IS NULL
            "#,
        )
        .bind(request.reset_token_id)
        .bind(request.used_at)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Error consuming reset token id {}: {:?}",
                request.reset_token_id, err
            );
            RepositoryError::from(err)
        })?;

        if consumed.rows_affected() == 0 {
            warn!(
                "⚠️ Reset token id {} was consumed concurrently",
                request.reset_token_id
            );
            return Err(RepositoryError::Conflict(
                "Reset token already used".to_string(),
            ));
        }

        sqlx::query(
            r#"
            UPDATE password_reset_tokens
            SET used_at = $2
            WHERE user_id = $1 AND used_at IS NULL
            "#,
        )
        .bind(request.user_id)
        .bind(request.used_at)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Error invalidating remaining tokens for user_id {}: {:?}",
                request.user_id, err
            );
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit password reset: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Password reset stored for user_id {} (token id {})",
            request.user_id, request.reset_token_id
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuance_locks_the_user_row() {
        let sql = LOCK_USER_FOR_ISSUE.to_ascii_lowercase();

        assert!(sql.contains("from users"));
        assert!(sql.contains("where id = $1"));
        assert!(sql.ends_with("for update"));
    }
}
