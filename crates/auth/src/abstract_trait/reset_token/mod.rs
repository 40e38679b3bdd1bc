use std::sync::Arc;

use crate::{
    domain::requests::reset_token::{CompletePasswordResetRequest, CreateResetTokenRequest},
    models::reset_token::ResetToken as ResetTokenModel,
};
use shared::errors::RepositoryError;

use async_trait::async_trait;

pub type DynResetTokenQueryRepository = Arc<dyn ResetTokenQueryRepositoryTrait + Send + Sync>;
pub type DynResetTokenCommandRepository = Arc<dyn ResetTokenCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ResetTokenQueryRepositoryTrait {
    async fn find_by_token_id(
        &self,
        token_id: &str,
    ) -> Result<Option<ResetTokenModel>, RepositoryError>;
}

#[async_trait]
pub trait ResetTokenCommandRepositoryTrait {
    /// Marks every active token of the user as used at `created_at`, then
    /// inserts the new one. Both happen in one transaction.
    async fn issue_token(
        &self,
        request: &CreateResetTokenRequest,
    ) -> Result<ResetTokenModel, RepositoryError>;

    /// Stores the new password hash, clears `must_change_password` and
    /// consumes the token along with any other active token of the user.
    /// Returns `Conflict` when the token was consumed concurrently.
    async fn complete_reset(
        &self,
        request: &CompletePasswordResetRequest,
    ) -> Result<(), RepositoryError>;
}
