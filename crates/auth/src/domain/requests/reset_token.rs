use chrono::{DateTime, Utc};

/// Everything needed to persist a freshly issued token. Only the hash of
/// the secret ever reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateResetTokenRequest {
    pub token_id: String,
    pub token_hash: String,
    pub user_id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CompletePasswordResetRequest {
    pub reset_token_id: i64,
    pub user_id: i32,
    pub password_hash: String,
    pub used_at: DateTime<Utc>,
}
