use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `password_reset_tokens`. Rows are never deleted; a non-null
/// `used_at` marks the token as consumed or superseded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResetToken {
    pub id: i64,
    pub token_id: String,
    #[serde(skip_serializing)]
    pub token_hash: String,
    pub user_id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl ResetToken {
    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    /// Expired once `now` reaches `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
