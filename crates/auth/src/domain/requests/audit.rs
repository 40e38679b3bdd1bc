use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    PasswordResetRequested,
    PasswordResetCompleted,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::PasswordResetRequested => "password_reset_requested",
            AuditAction::PasswordResetCompleted => "password_reset_completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAuditLogRequest {
    pub action: AuditAction,
    pub subject_type: String,
    pub subject_id: i32,
    pub actor_id: Option<i32>,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
