use crate::{
    abstract_trait::auth::DynPasswordResetService,
    domain::requests::password_reset::{
        ConfirmPasswordResetRequest, ForgotPasswordRequest, RequestPasswordReset,
        ValidateTokenQuery,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Query,
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::responses::ApiResponse, errors::HttpError, middleware::SimpleValidatedJson,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// First hop of `X-Forwarded-For`, else `X-Real-IP`.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_value(headers, X_FORWARDED_FOR)
        .and_then(|forwarded| {
            forwarded
                .split(',')
                .map(str::trim)
                .find(|hop| !hop.is_empty())
                .map(str::to_string)
        })
        .or_else(|| header_value(headers, X_REAL_IP))
}

pub fn user_agent(headers: &HeaderMap) -> Option<String> {
    header_value(headers, USER_AGENT.as_str())
}

#[utoipa::path(
    post,
    path = "/api/auth/password-reset",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 202, description = "Request accepted; a link is sent when the email is registered", body = ApiResponse<bool>),
        (status = 400, description = "Invalid email"),
        (status = 500, description = "Email delivery failed")
    ),
    tag = "Auth"
)]
pub async fn request_password_reset_handler(
    Extension(service): Extension<DynPasswordResetService>,
    headers: HeaderMap,
    SimpleValidatedJson(body): SimpleValidatedJson<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let request = RequestPasswordReset {
        email: body.email,
        ip_address: client_ip(&headers),
        user_agent: user_agent(&headers),
    };

    let response = service.request_reset(&request).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/password-reset/validate",
    params(ValidateTokenQuery),
    responses(
        (status = 200, description = "Token is valid", body = ApiResponse<bool>),
        (status = 400, description = "Invalid or expired link")
    ),
    tag = "Auth"
)]
pub async fn validate_reset_token_handler(
    Extension(service): Extension<DynPasswordResetService>,
    Query(query): Query<ValidateTokenQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let token = query.token.unwrap_or_default();
    let response = service.validate_token(&token).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/password-reset/confirm",
    request_body = ConfirmPasswordResetRequest,
    responses(
        (status = 200, description = "Password updated", body = ApiResponse<bool>),
        (status = 400, description = "Invalid or expired link, or invalid password")
    ),
    tag = "Auth"
)]
pub async fn confirm_password_reset_handler(
    Extension(service): Extension<DynPasswordResetService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ConfirmPasswordResetRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.confirm_reset(&body.into()).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn password_reset_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/auth/password-reset",
            post(request_password_reset_handler),
        )
        .route(
            "/api/auth/password-reset/validate",
            get(validate_reset_token_handler),
        )
        .route(
            "/api/auth/password-reset/confirm",
            post(confirm_password_reset_handler),
        )
        .layer(Extension(
            app_state.di_container.password_reset_service.clone(),
        ))
        .with_state(app_state)
}
