use crate::{
    abstract_trait::{
        audit::DynAuditLogRepository,
        auth::PasswordResetServiceTrait,
        reset_token::{DynResetTokenCommandRepository, DynResetTokenQueryRepository},
        user::DynUserQueryRepository,
    },
    config::PasswordResetConfig,
    domain::requests::{
        audit::{AuditAction, CreateAuditLogRequest},
        password_reset::{ConfirmPasswordReset, RequestPasswordReset},
        reset_token::{CompletePasswordResetRequest, CreateResetTokenRequest},
    },
    models::reset_token::ResetToken as ResetTokenModel,
    service::token::{generate_token, parse_token},
};

use async_trait::async_trait;
use chrono::Datelike;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use serde_json::json;
use shared::{
    abstract_trait::{DynClock, DynEmailService, DynHashing},
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
    utils::{
        Method, Metrics, PasswordResetEmailData, Status as StatusUtils, TracingContext,
        password_reset_email,
    },
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info, warn};

const SUBJECT_TYPE_USER: &str = "user";
const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 191;
// bcrypt only reads the first 72 bytes of its input.
const MAX_PASSWORD_BYTES: usize = 72;
// Hashed when the email is unknown so both paths cost one bcrypt round.
const DUMMY_SECRET: &str = "rotaonco-password-reset-placeholder";

pub struct PasswordResetServiceDeps {
    pub reset_token_query: DynResetTokenQueryRepository,
    pub reset_token_command: DynResetTokenCommandRepository,
    pub user_query: DynUserQueryRepository,
    pub audit: DynAuditLogRepository,
    pub hashing: DynHashing,
    pub email: DynEmailService,
    pub clock: DynClock,
    pub config: PasswordResetConfig,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

#[derive(Clone)]
pub struct PasswordResetService {
    reset_token_query: DynResetTokenQueryRepository,
    reset_token_command: DynResetTokenCommandRepository,
    user_query: DynUserQueryRepository,
    audit: DynAuditLogRepository,
    hashing: DynHashing,
    email: DynEmailService,
    clock: DynClock,
    config: PasswordResetConfig,
    metrics: Arc<Mutex<Metrics>>,
}

impl PasswordResetService {
    pub async fn new(deps: PasswordResetServiceDeps) -> Self {
        let PasswordResetServiceDeps {
            reset_token_query,
            reset_token_command,
            user_query,
            audit,
            hashing,
            email,
            clock,
            config,
            metrics,
            registry,
        } = deps;

        metrics.lock().await.register(
            &mut *registry.lock().await,
            "password_reset_service",
            "PasswordResetService",
        );

        Self {
            reset_token_query,
            reset_token_command,
            user_query,
            audit,
            hashing,
            email,
            clock,
            config,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("password-reset-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    async fn complete_tracing_success(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, true, message)
            .await;
    }

    async fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message)
            .await;
    }

    async fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.lock().await.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }

    async fn finish<T>(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        result: Result<T, ServiceError>,
        success_message: &str,
    ) -> Result<T, ServiceError> {
        match &result {
            Ok(_) => {
                self.complete_tracing_success(tracing_ctx, method, success_message)
                    .await
            }
            Err(e) if e.is_token_error() => {
                warn!("⚠️ Reset link rejected: {e}");
                self.complete_tracing_error(tracing_ctx, method, &e.to_string())
                    .await
            }
            Err(e) => {
                self.complete_tracing_error(tracing_ctx, method, &e.to_string())
                    .await
            }
        }
        result
    }

    /// Resolves a presented token to its unconsumed, unexpired row. Never
    /// mutates anything.
    async fn find_valid_token(&self, raw_token: &str) -> Result<ResetTokenModel, ServiceError> {
        let parsed = parse_token(raw_token)?;

        let Some(record) = self
            .reset_token_query
            .find_by_token_id(parsed.token_id)
            .await?
        else {
            warn!("⚠️ Reset token identifier not found");
            return Err(ServiceError::InvalidToken);
        };

        if record.is_used() {
            warn!("⚠️ Reset token id={} already used", record.id);
            return Err(ServiceError::TokenAlreadyUsed);
        }

        if record.is_expired_at(self.clock.now()) {
            warn!("⚠️ Reset token id={} expired", record.id);
            return Err(ServiceError::TokenExpired);
        }

        if !self
            .hashing
            .verify_password(&record.token_hash, parsed.secret)
            .await?
        {
            warn!("⚠️ Reset token id={} secret mismatch", record.id);
            return Err(ServiceError::InvalidToken);
        }

        Ok(record)
    }

    async fn issue_and_send(&self, request: &RequestPasswordReset) -> Result<(), ServiceError> {
        let email = request.email.trim().to_lowercase();

        let Some(user) = self.user_query.find_by_email(&email).await? else {
            self.hashing.hash_password(DUMMY_SECRET).await?;
            info!("🔍 Password reset requested for an unknown email");
            return Ok(());
        };

        let token = generate_token()?;
        let token_hash = self.hashing.hash_password(&token.secret).await?;
        let now = self.clock.now();

        let create = CreateResetTokenRequest {
            token_id: token.token_id.clone(),
            token_hash,
            user_id: user.id,
            email: user.email.clone(),
            created_at: now,
            expires_at: now + self.config.token_ttl(),
            ip_address: request.ip_address.clone(),
            user_agent: request.user_agent.clone(),
        };

        let record = self.reset_token_command.issue_token(&create).await?;

        let reset_url = self.config.reset_url(&token.value);
        let message = password_reset_email(&PasswordResetEmailData {
            to: &user.email,
            reset_url: &reset_url,
            name: Some(&user.name),
            ttl_minutes: self.config.token_ttl_minutes,
            year: now.year(),
        })?;

        if let Err(e) = self.email.send(&message).await {
            error!(
                "❌ Failed to send password reset email to {}: {}",
                user.email, e
            );
            return Err(e);
        }

        self.audit
            .insert_audit_log(&CreateAuditLogRequest {
                action: AuditAction::PasswordResetRequested,
                subject_type: SUBJECT_TYPE_USER.to_string(),
                subject_id: user.id,
                actor_id: None,
                metadata: json!({
                    "ipAddress": request.ip_address,
                    "userAgent": request.user_agent,
                }),
                created_at: now,
            })
            .await?;

        info!(
            "📧 Password reset token id={} issued for user_id {}",
            record.id, user.id
        );

        Ok(())
    }

    async fn consume(&self, request: &ConfirmPasswordReset) -> Result<(), ServiceError> {
        let record = self.find_valid_token(&request.token).await?;

        let length = request.new_password.chars().count();
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(ServiceError::Validation(vec![format!(
                "new_password: A senha deve ter entre {MIN_PASSWORD_LENGTH} e {MAX_PASSWORD_LENGTH} caracteres"
            )]));
        }
        if request.new_password.len() > MAX_PASSWORD_BYTES {
            return Err(ServiceError::Validation(vec![format!(
                "new_password: A senha deve ter no máximo {MAX_PASSWORD_BYTES} bytes"
            )]));
        }

        let password_hash = self.hashing.hash_password(&request.new_password).await?;
        let now = self.clock.now();

        self.reset_token_command
            .complete_reset(&CompletePasswordResetRequest {
                reset_token_id: record.id,
                user_id: record.user_id,
                password_hash,
                used_at: now,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => ServiceError::TokenAlreadyUsed,
                other => ServiceError::Repo(other),
            })?;

        self.audit
            .insert_audit_log(&CreateAuditLogRequest {
                action: AuditAction::PasswordResetCompleted,
                subject_type: SUBJECT_TYPE_USER.to_string(),
                subject_id: record.user_id,
                actor_id: Some(record.user_id),
                metadata: json!({
                    "ipAddress": null,
                    "userAgent": null,
                }),
                created_at: now,
            })
            .await?;

        info!(
            "🔐 Password reset completed for user_id {}",
            record.user_id
        );

        Ok(())
    }
}

#[async_trait]
impl PasswordResetServiceTrait for PasswordResetService {
    async fn request_reset(
        &self,
        request: &RequestPasswordReset,
    ) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🔐 Password reset requested");

        let method = Method::Post;
        let tracing_ctx = self.start_tracing(
            "RequestPasswordReset",
            vec![KeyValue::new("component", "auth")],
        );

        let result = self.issue_and_send(request).await;

        self.finish(&tracing_ctx, method, result, "Password reset request handled")
            .await?;

        Ok(ApiResponse::success(
            "Se o e-mail estiver cadastrado, enviaremos um link para redefinir a senha",
            true,
        ))
    }

    async fn validate_token(&self, token: &str) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🔍 Validating password reset token");

        let method = Method::Get;
        let tracing_ctx = self.start_tracing(
            "ValidatePasswordResetToken",
            vec![KeyValue::new("component", "auth")],
        );

        let result = self.find_valid_token(token).await.map(|_| ());

        self.finish(&tracing_ctx, method, result, "Reset token is valid")
            .await?;

        Ok(ApiResponse::success("Token válido", true))
    }

    async fn confirm_reset(
        &self,
        request: &ConfirmPasswordReset,
    ) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🔁 Confirming password reset");

        let method = Method::Post;
        let tracing_ctx = self.start_tracing(
            "ConfirmPasswordReset",
            vec![KeyValue::new("component", "auth")],
        );

        let result = self.consume(request).await;

        self.finish(&tracing_ctx, method, result, "Password reset completed")
            .await?;

        Ok(ApiResponse::success("Senha redefinida com sucesso", true))
    }
}
