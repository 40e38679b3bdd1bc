use crate::{abstract_trait::user::UserQueryRepositoryTrait, models::user::User as UserModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, name, email, must_change_password, is_active, created_at, updated_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email.trim())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Query failed for user lookup by email: {:?}", e);
            RepositoryError::from(e)
        })?;

        if let Some(found) = &user {
            info!("✅ Found user id={}", found.id);
        }

        Ok(user)
    }
}
