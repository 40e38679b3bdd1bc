use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub const INVALID_RESET_LINK_MESSAGE: &str = "Link inválido ou expirado";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidToken
            | ServiceError::TokenExpired
            | ServiceError::TokenAlreadyUsed => {
                HttpError::BadRequest(INVALID_RESET_LINK_MESSAGE.to_string())
            }

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::Sqlx(err) => {
                    error!("❌ Repository failure: {err}");
                    HttpError::Internal("Repository error".into())
                }
            },

            ServiceError::Email(msg) => {
                error!("❌ Email delivery failure: {msg}");
                HttpError::Internal("Não foi possível enviar o e-mail".into())
            }

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ServiceError::InvalidToken)]
    #[case(ServiceError::TokenExpired)]
    #[case(ServiceError::TokenAlreadyUsed)]
    fn token_errors_share_one_message(#[case] err: ServiceError) {
        let http = HttpError::from(err);

        assert_eq!(http.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(http.message(), INVALID_RESET_LINK_MESSAGE);
    }

    #[test]
    fn email_failure_is_generic_internal_error() {
        let http = HttpError::from(ServiceError::Email("smtp timeout to x@y.com".into()));

        assert_eq!(http.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!http.message().contains("x@y.com"));
    }

    #[test]
    fn not_found_repository_error_maps_to_404() {
        let http = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));

        assert_eq!(http.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn lost_race_conflict_maps_to_409() {
        let http = HttpError::from(ServiceError::Repo(RepositoryError::Conflict(
            "Reset token already used".into(),
        )));

        assert_eq!(http.status_code(), StatusCode::CONFLICT);
        assert_eq!(http.message(), "Reset token already used");
    }

    #[test]
    fn database_failure_hides_driver_detail() {
        let http = HttpError::from(ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::PoolTimedOut,
        )));

        assert_eq!(http.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(http.message(), "Repository error");
    }

    #[test]
    fn validation_errors_are_joined() {
        let http = HttpError::from(ServiceError::Validation(vec![
            "email: Invalid email format".into(),
            "password: Invalid length".into(),
        ]));

        assert_eq!(http.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            http.message(),
            "email: Invalid email format; password: Invalid length"
        );
    }
}
