use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{BcryptError, DEFAULT_COST, non_truncating_hash, verify};

#[derive(Clone)]
pub struct Hashing {
    cost: u32,
}

impl Hashing {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || non_truncating_hash(password, cost))
            .await
            .map_err(|e| ServiceError::Internal(format!("Hashing task failed: {e}")))?
            .map_err(|e| match e {
                BcryptError::Truncation(len) => ServiceError::Validation(vec![format!(
                    "password: {len} bytes exceeds the bcrypt limit of 72"
                )]),
                other => ServiceError::Bcrypt(other),
            })
    }

    async fn verify_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<bool, ServiceError> {
        let password = password.to_owned();
        let hashed_password = hashed_password.to_owned();

        tokio::task::spawn_blocking(move || verify(password, &hashed_password))
            .await
            .map_err(|e| ServiceError::Internal(format!("Hashing task failed: {e}")))?
            .map_err(ServiceError::Bcrypt)
    }
}
