use axum::Router;
use casetrack::{api_router, config::Settings, database::Store, AppState};

/// Build the full router around a deliberately degraded store.
///
/// The suite exercises everything that needs no live document store:
/// routing, payload validation, identifier handling, the no-op update path,
/// the placeholder lookup, and the store-unavailable mapping on every data
/// endpoint.
pub fn create_test_app() -> Router {
    let app_state = AppState::new_with_store(test_settings(), Store::unavailable());
    api_router(app_state)
}

pub fn test_settings() -> Settings {
    Settings {
        database_url: None,
        database_name: "casetrack_test".to_string(),
        port: 0,
        cors_allow_origins: vec!["*".to_string()],
        log_level: "error".to_string(),
        log_format: "plain".to_string(),
    }
}

/// A syntactically valid public id that matches no document.
pub const WELL_FORMED_ID: &str = "507f1f77bcf86cd799439011";

/// Helper to extract response body as bytes
pub async fn extract_body(response: axum::response::Response) -> Vec<u8> {
    use axum::body::to_bytes;
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    body.to_vec()
}
