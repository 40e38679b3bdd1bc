use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Informe um e-mail válido"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ValidateTokenQuery {
    /// The `identifier.secret` token from the reset link. A missing value is
    /// reported like any other invalid token.
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPasswordResetRequest {
    #[validate(length(min = 1, message = "Token ausente"))]
    pub token: String,

    #[validate(length(
        min = 8,
        max = 191,
        message = "A senha deve ter entre 8 e 191 caracteres"
    ))]
    pub new_password: String,

    #[validate(must_match(other = "new_password", message = "As senhas devem ser iguais"))]
    pub confirm_password: String,
}

/// Service input for a reset request; `ip_address` and `user_agent` are
/// stored on the token row and in the audit entry.
#[derive(Debug, Clone, Default)]
pub struct RequestPasswordReset {
    pub email: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ConfirmPasswordReset {
    pub token: String,
    pub new_password: String,
}

impl From<ConfirmPasswordResetRequest> for ConfirmPasswordReset {
    fn from(value: ConfirmPasswordResetRequest) -> Self {
        Self {
            token: value.token,
            new_password: value.new_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm(new_password: &str, confirm_password: &str) -> ConfirmPasswordResetRequest {
        ConfirmPasswordResetRequest {
            token: "id.secret".into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    #[test]
    fn confirm_request_accepts_matching_passwords() {
        assert!(confirm("senha-forte-1", "senha-forte-1").validate().is_ok());
    }

    #[test]
    fn confirm_request_rejects_mismatch() {
        let errors = confirm("senha-forte-1", "senha-forte-2").validate().unwrap_err();

        assert!(errors.field_errors().contains_key("confirm_password"));
    }

    #[test]
    fn confirm_request_rejects_short_password() {
        let errors = confirm("curta", "curta").validate().unwrap_err();

        assert!(errors.field_errors().contains_key("new_password"));
    }

    #[test]
    fn confirm_request_reads_camel_case() {
        let body = r#"{"token":"a.b","newPassword":"12345678","confirmPassword":"12345678"}"#;

        let request: ConfirmPasswordResetRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.new_password, "12345678");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn forgot_request_requires_email() {
        let request = ForgotPasswordRequest {
            email: "sem-arroba".into(),
        };

        assert!(request.validate().is_err());
    }
}
