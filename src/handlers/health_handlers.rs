use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::{error::ApiError, AppState};

/// Collections reported by the diagnostic endpoint are capped to keep the
/// payload small.
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Service banner.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Investigation Case Manager API running" }))
}

/// Store reachability diagnostics.
///
/// Every probe failure is folded into a descriptive string; this endpoint
/// never answers with an error status.
pub async fn store_diagnostics(State(app_state): State<AppState>) -> Json<Value> {
    let mut response = json!({
        "backend": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "database": "not available",
        "database_url": if app_state.config.database_url.is_some() { "set" } else { "not set" },
        "database_name": app_state.config.database_name.clone(),
        "connection_status": "not connected",
        "collections": [],
    });

    if !app_state.store.is_available() {
        return Json(response);
    }
    response["database"] = json!("available");

    match app_state.store.ping().await {
        Ok(()) => {
            response["connection_status"] = json!("connected");
            match app_state.store.collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_REPORTED_COLLECTIONS);
                    response["database"] = json!("connected and working");
                    response["collections"] = json!(names);
                }
                Err(err) => {
                    response["database"] =
                        json!(format!("connected but error: {}", short_error(&err)));
                }
            }
        }
        Err(err) => {
            response["database"] = json!(format!("error: {}", short_error(&err)));
        }
    }

    Json(response)
}

fn short_error(err: &ApiError) -> String {
    err.to_string().chars().take(80).collect()
}
