use crate::{
    abstract_trait::audit::AuditLogRepositoryTrait,
    domain::requests::audit::CreateAuditLogRequest,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct AuditLogRepository {
    db: ConnectionPool,
}

impl AuditLogRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditLogRepositoryTrait for AuditLogRepository {
    async fn insert_audit_log(
        &self,
        request: &CreateAuditLogRequest,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO audit_logs (action, subject_type, subject_id, actor_id, metadata, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(request.action.as_str())
        .bind(&request.subject_type)
        .bind(request.subject_id)
        .bind(request.actor_id)
        .bind(&request.metadata)
        .bind(request.created_at)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Error writing audit log {} for {} {}: {:?}",
                request.action.as_str(),
                request.subject_type,
                request.subject_id,
                err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "📝 Audit {} recorded for {} {}",
            request.action.as_str(),
            request.subject_type,
            request.subject_id
        );

        Ok(())
    }
}
