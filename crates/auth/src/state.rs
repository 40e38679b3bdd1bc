use crate::{
    config::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynClock, DynEmailService, DynHashing},
    config::{ConnectionPool, Hashing, SystemClock},
    service::EmailService,
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &self.registry)
            .field("metrics", &self.metrics)
            .field("system_metrics", &self.system_metrics)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let hashing = Arc::new(Hashing::with_cost(config.bcrypt_cost)) as DynHashing;
        let clock = Arc::new(SystemClock) as DynClock;
        let system_metrics = Arc::new(SystemMetrics::new());

        let email = Arc::new(
            EmailService::new(&config.email).context("Failed to initialize SMTP transport")?,
        ) as DynEmailService;

        let deps = DependenciesInjectDeps {
            pool,
            hash: hashing,
            email,
            clock,
            password_reset: config.password_reset.clone(),
            metrics: metrics.clone(),
            registry: registry.clone(),
        };

        let di_container = DependenciesInject::new(deps).await;

        system_metrics.register(&mut *registry.lock().await);

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            di_container,
            registry,
            metrics,
            system_metrics,
        })
    }
}
