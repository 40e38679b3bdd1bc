#![allow(dead_code)]

use async_trait::async_trait;
use auth::{
    abstract_trait::{
        audit::{AuditLogRepositoryTrait, DynAuditLogRepository},
        reset_token::{
            DynResetTokenCommandRepository, DynResetTokenQueryRepository,
            ResetTokenCommandRepositoryTrait, ResetTokenQueryRepositoryTrait,
        },
        user::{DynUserQueryRepository, UserQueryRepositoryTrait},
    },
    config::PasswordResetConfig,
    domain::requests::{
        audit::CreateAuditLogRequest,
        reset_token::{CompletePasswordResetRequest, CreateResetTokenRequest},
    },
    models::{reset_token::ResetToken, user::User},
    service::{PasswordResetService, PasswordResetServiceDeps},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{ClockTrait, DynClock, DynEmailService, DynHashing, EmailServiceTrait},
    config::Hashing,
    domain::requests::EmailRequest,
    errors::{RepositoryError, ServiceError},
    utils::Metrics,
};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};
use tokio::sync::Mutex as AsyncMutex;

pub const ANA_ID: i32 = 1;
pub const ANA_EMAIL: &str = "ana@rotaonco.com";
pub const ANA_PASSWORD: &str = "senha-antiga-123";

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    credentials: HashMap<i32, String>,
    tokens: Vec<ResetToken>,
    audit: Vec<CreateAuditLogRequest>,
}

/// Postgres stand-in. Each trait method takes the lock once, which gives
/// the same all-or-nothing behaviour as the real transactions.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    token_lookups: AtomicUsize,
}

impl InMemoryStore {
    pub fn seed_user(&self, id: i32, name: &str, email: &str, password_hash: Option<String>) {
        let mut state = self.state.lock().unwrap();
        let now = Utc::now();
        state.users.push(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            must_change_password: true,
            is_active: true,
            created_at: now,
            updated_at: now,
        });
        if let Some(hash) = password_hash {
            state.credentials.insert(id, hash);
        }
    }

    pub fn tokens(&self) -> Vec<ResetToken> {
        self.state.lock().unwrap().tokens.clone()
    }

    pub fn active_tokens(&self, user_id: i32) -> Vec<ResetToken> {
        self.tokens()
            .into_iter()
            .filter(|t| t.user_id == user_id && t.used_at.is_none())
            .collect()
    }

    pub fn audit_entries(&self) -> Vec<CreateAuditLogRequest> {
        self.state.lock().unwrap().audit.clone()
    }

    pub fn credential(&self, user_id: i32) -> Option<String> {
        self.state.lock().unwrap().credentials.get(&user_id).cloned()
    }

    pub fn user(&self, user_id: i32) -> Option<User> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
    }

    pub fn token_lookups(&self) -> usize {
        self.token_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let needle = email.trim().to_lowercase();
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.email.to_lowercase() == needle)
            .cloned())
    }
}

#[async_trait]
impl ResetTokenQueryRepositoryTrait for InMemoryStore {
    async fn find_by_token_id(&self, token_id: &str) -> Result<Option<ResetToken>, RepositoryError> {
        self.token_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .state
            .lock()
            .unwrap()
            .tokens
            .iter()
            .find(|t| t.token_id == token_id)
            .cloned())
    }
}

#[async_trait]
impl ResetTokenCommandRepositoryTrait for InMemoryStore {
    async fn issue_token(
        &self,
        request: &CreateResetTokenRequest,
    ) -> Result<ResetToken, RepositoryError> {
        let mut state = self.state.lock().unwrap();

        for token in state
            .tokens
            .iter_mut()
            .filter(|t| t.user_id == request.user_id && t.used_at.is_none())
        {
            token.used_at = Some(request.created_at);
        }

        let token = ResetToken {
            id: state.tokens.len() as i64 + 1,
            token_id: request.token_id.clone(),
            token_hash: request.token_hash.clone(),
            user_id: request.user_id,
            email: request.email.clone(),
            created_at: request.created_at,
            expires_at: request.expires_at,
            used_at: None,
            ip_address: request.ip_address.clone(),
            user_agent: request.user_agent.clone(),
        };
        state.tokens.push(token.clone());

        Ok(token)
    }

    async fn complete_reset(
        &self,
        request: &CompletePasswordResetRequest,
    ) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();

        if !state.credentials.contains_key(&request.user_id) {
            return Err(RepositoryError::NotFound);
        }

        let already_used = state
            .tokens
            .iter()
            .find(|t| t.id == request.reset_token_id)
            .is_none_or(|t| t.used_at.is_some());
        if already_used {
            return Err(RepositoryError::Conflict("Reset token already used".into()));
        }

        state
            .credentials
            .insert(request.user_id, request.password_hash.clone());

        if let Some(user) = state.users.iter_mut().find(|u| u.id == request.user_id) {
            user.must_change_password = false;
            user.updated_at = request.used_at;
        }

        for token in state
            .tokens
            .iter_mut()
            .filter(|t| t.user_id == request.user_id && t.used_at.is_none())
        {
            token.used_at = Some(request.used_at);
        }

        Ok(())
    }
}

#[async_trait]
impl AuditLogRepositoryTrait for InMemoryStore {
    async fn insert_audit_log(
        &self,
        request: &CreateAuditLogRequest,
    ) -> Result<(), RepositoryError> {
        self.state.lock().unwrap().audit.push(request.clone());
        Ok(())
    }
}

/// Records every message it is asked to send, delivered or not.
#[derive(Default)]
pub struct FakeMailer {
    attempts: Mutex<Vec<EmailRequest>>,
    fail: AtomicBool,
}

impl FakeMailer {
    pub fn fail_next_sends(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> Vec<EmailRequest> {
        self.attempts.lock().unwrap().clone()
    }

    /// Pulls the raw token out of the reset link in the last message.
    pub fn last_token(&self) -> Option<String> {
        let last = self.attempts().pop()?;
        let start = last.text.find("token=")? + "token=".len();
        let encoded: String = last.text[start..]
            .chars()
            .take_while(|c| !c.is_whitespace())
            .collect();
        urlencoding::decode(&encoded).ok().map(|t| t.into_owned())
    }
}

#[async_trait]
impl EmailServiceTrait for FakeMailer {
    async fn send(&self, req: &EmailRequest) -> Result<(), ServiceError> {
        self.attempts.lock().unwrap().push(req.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(ServiceError::Email("SMTP connection refused".into()));
        }
        Ok(())
    }
}

pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap() = to;
    }
}

impl ClockTrait for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct TestContext {
    pub service: PasswordResetService,
    pub store: Arc<InMemoryStore>,
    pub mailer: Arc<FakeMailer>,
    pub clock: Arc<FixedClock>,
    pub hashing: Arc<Hashing>,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

pub async fn setup() -> TestContext {
    setup_with_config(PasswordResetConfig::default()).await
}

pub async fn setup_with_config(config: PasswordResetConfig) -> TestContext {
    let hashing = Arc::new(Hashing::with_cost(4));
    let store = Arc::new(InMemoryStore::default());
    let mailer = Arc::new(FakeMailer::default());
    let clock = Arc::new(FixedClock::new(start_time()));

    let ana_hash = bcrypt::hash(ANA_PASSWORD, 4).unwrap();
    store.seed_user(ANA_ID, "Ana Maria Souza", ANA_EMAIL, Some(ana_hash));

    let deps = PasswordResetServiceDeps {
        reset_token_query: store.clone() as DynResetTokenQueryRepository,
        reset_token_command: store.clone() as DynResetTokenCommandRepository,
        user_query: store.clone() as DynUserQueryRepository,
        audit: store.clone() as DynAuditLogRepository,
        hashing: hashing.clone() as DynHashing,
        email: mailer.clone() as DynEmailService,
        clock: clock.clone() as DynClock,
        config,
        metrics: Arc::new(AsyncMutex::new(Metrics::new())),
        registry: Arc::new(AsyncMutex::new(Registry::default())),
    };

    let service = PasswordResetService::new(deps).await;

    TestContext {
        service,
        store,
        mailer,
        clock,
        hashing,
    }
}
