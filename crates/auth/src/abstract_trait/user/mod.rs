use std::sync::Arc;

use crate::models::user::User as UserModel;
use shared::errors::RepositoryError;

use async_trait::async_trait;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    /// Case-insensitive lookup on the trimmed address.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError>;
}
