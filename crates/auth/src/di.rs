use crate::{
    abstract_trait::{
        audit::DynAuditLogRepository, auth::DynPasswordResetService,
        user::DynUserQueryRepository,
    },
    config::PasswordResetConfig,
    repository::{AuditLogRepository, ResetTokenRepository, UserQueryRepository},
    service::{PasswordResetService, PasswordResetServiceDeps},
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynClock, DynEmailService, DynHashing},
    config::ConnectionPool,
    utils::Metrics,
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub password_reset_service: DynPasswordResetService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("password_reset_service", &"PasswordResetService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub email: DynEmailService,
    pub clock: DynClock,
    pub password_reset: PasswordResetConfig,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            email,
            clock,
            password_reset,
            metrics,
            registry,
        } = deps;

        let reset_token = ResetTokenRepository::new(pool.clone());
        let user_query = Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;
        let audit = Arc::new(AuditLogRepository::new(pool)) as DynAuditLogRepository;

        let password_deps = PasswordResetServiceDeps {
            reset_token_query: reset_token.query,
            reset_token_command: reset_token.command,
            user_query,
            audit,
            hashing: hash,
            email,
            clock,
            config: password_reset,
            metrics,
            registry,
        };

        let password_reset_service =
            Arc::new(PasswordResetService::new(password_deps).await) as DynPasswordResetService;

        Self {
            password_reset_service,
        }
    }
}
