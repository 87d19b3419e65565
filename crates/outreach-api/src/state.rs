//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use outreach_auth::jwt::{JwtDecoder, JwtEncoder};
use outreach_auth::password::PasswordHasher;
use outreach_auth::rbac::RbacEnforcer;
use outreach_core::config::AppConfig;
use outreach_database::DatabasePool;
use outreach_database::repositories::{
    AuditLogRepository, DisclosureRepository, EligibilityContext, EmployeeRepository,
    PaymentRepository, ReferenceLookup, ReferenceRepository,
};
use outreach_service::{AuditTrailService, AuthService, PaymentService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// When the process started serving
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role-based access control enforcer
    pub rbac_enforcer: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    /// Sign-in
    pub auth_service: Arc<AuthService>,
    /// Payment listings and mark-as-paid
    pub payment_service: Arc<PaymentService>,
    /// Disclosure audit trail
    pub audit_service: Arc<AuditTrailService>,
}

impl AppState {
    /// Wire repositories, auth primitives and services over one pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let db_pool = db.pool().clone();

        // ── Repositories ─────────────────────────────────────
        let employee_repo = Arc::new(EmployeeRepository::new(db_pool.clone()));
        let disclosure_repo = Arc::new(DisclosureRepository::new(db_pool.clone()));
        let audit_repo = Arc::new(AuditLogRepository::new(db_pool.clone()));
        let payment_repo = Arc::new(PaymentRepository::new(
            db_pool.clone(),
            EligibilityContext::from_config(&config.payment),
        ));
        let reference_lookup: Arc<dyn ReferenceLookup> =
            Arc::new(ReferenceRepository::new(db_pool.clone()));

        // ── Auth ─────────────────────────────────────────────
        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());

        // ── Services ─────────────────────────────────────────
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&employee_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&jwt_encoder),
        ));
        let payment_service = Arc::new(PaymentService::new(Arc::clone(&payment_repo)));
        let audit_service = Arc::new(AuditTrailService::new(
            Arc::clone(&audit_repo),
            Arc::clone(&disclosure_repo),
            reference_lookup,
        ));

        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            db,
            jwt_decoder,
            rbac_enforcer,
            auth_service,
            payment_service,
            audit_service,
        }
    }
}
