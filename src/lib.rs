use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{
    config::Settings,
    database::Store,
    repositories::{
        case_repo::MongoCaseRepository, evidence_repo::MongoEvidenceRepository, CaseRepository,
        EvidenceRepository,
    },
};

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod utils;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub store: Store,
    pub case_repository: Arc<dyn CaseRepository + Send + Sync>,
    pub evidence_repository: Arc<dyn EvidenceRepository + Send + Sync>,
}

impl AppState {
    /// Create new application state with dependency injection.
    ///
    /// A missing or malformed connection string degrades the store instead
    /// of failing startup; data endpoints then answer with a store error.
    pub async fn new(config: Settings) -> Self {
        let store = Store::connect(&config).await;
        Self::new_with_store(config, store)
    }

    /// Create new application state around an existing store handle
    pub fn new_with_store(config: Settings, store: Store) -> Self {
        let case_repository: Arc<dyn CaseRepository + Send + Sync> =
            Arc::new(MongoCaseRepository::new(store.clone()));
        let evidence_repository: Arc<dyn EvidenceRepository + Send + Sync> =
            Arc::new(MongoEvidenceRepository::new(store.clone()));

        Self {
            config: Arc::new(config),
            store,
            case_repository,
            evidence_repository,
        }
    }
}

/// Assemble the HTTP surface around the given state.
pub fn api_router(app_state: AppState) -> Router {
    Router::new()
        // Banner and diagnostics
        .route("/", get(handlers::root))
        .route("/test", get(handlers::store_diagnostics))
        // Case endpoints
        .route("/api/cases", post(handlers::case_handlers::create_case))
        .route("/api/cases", get(handlers::case_handlers::list_cases))
        .route("/api/cases/:id", get(handlers::case_handlers::get_case))
        .route("/api/cases/:id", patch(handlers::case_handlers::update_case))
        // Evidence endpoints
        .route("/api/evidence", post(handlers::evidence_handlers::add_evidence))
        .route(
            "/api/cases/:id/evidence",
            get(handlers::evidence_handlers::list_evidence_by_case),
        )
        // Public profile lookup (approved sources only)
        .route("/api/lookup/:username", get(handlers::lookup_handlers::public_lookup))
        .with_state(app_state)
}
