use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::ServiceError;

pub type DynHashing = Arc<dyn HashingTrait + Send + Sync>;

#[async_trait]
pub trait HashingTrait {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError>;

    /// Constant-time check of `password` against a stored hash. A mismatch is
    /// `Ok(false)`; only a malformed hash is an error.
    async fn verify_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<bool, ServiceError>;
}
