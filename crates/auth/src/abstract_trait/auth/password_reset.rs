use crate::domain::requests::password_reset::{ConfirmPasswordReset, RequestPasswordReset};
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

use async_trait::async_trait;

pub type DynPasswordResetService = Arc<dyn PasswordResetServiceTrait + Send + Sync>;

#[async_trait]
pub trait PasswordResetServiceTrait {
    /// Issues a token and emails the link. Succeeds for unknown addresses
    /// too, so callers cannot probe which emails are registered.
    async fn request_reset(
        &self,
        request: &RequestPasswordReset,
    ) -> Result<ApiResponse<bool>, ServiceError>;

    async fn validate_token(&self, token: &str) -> Result<ApiResponse<bool>, ServiceError>;

    async fn confirm_reset(
        &self,
        request: &ConfirmPasswordReset,
    ) -> Result<ApiResponse<bool>, ServiceError>;
}
