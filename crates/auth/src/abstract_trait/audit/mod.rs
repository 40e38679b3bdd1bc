use std::sync::Arc;

use crate::domain::requests::audit::CreateAuditLogRequest;
use shared::errors::RepositoryError;

use async_trait::async_trait;

pub type DynAuditLogRepository = Arc<dyn AuditLogRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait AuditLogRepositoryTrait {
    async fn insert_audit_log(&self, request: &CreateAuditLogRequest)
    -> Result<(), RepositoryError>;
}
