use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::{
    error::ApiError,
    models::{CaseCreate, CaseFilter, CaseResponse, CaseUpdate, CreatedResponse, UpdatedResponse},
    utils::{parse_public_id, public_id},
    AppState,
};

const DEFAULT_CASE_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct CaseListParams {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

pub async fn create_case(
    State(app_state): State<AppState>,
    Json(payload): Json<CaseCreate>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let case = payload.into_case();
    let id = app_state.case_repository.insert(&case).await?;
    Ok(Json(CreatedResponse { id: public_id(&id) }))
}

pub async fn list_cases(
    State(app_state): State<AppState>,
    Query(params): Query<CaseListParams>,
) -> Result<Json<Vec<CaseResponse>>, ApiError> {
    let filter = CaseFilter {
        username: params.username,
        status: params.status,
    };
    let limit = params.limit.unwrap_or(DEFAULT_CASE_LIMIT);

    let cases = app_state.case_repository.find(filter, limit).await?;
    cases
        .into_iter()
        .map(|case| case.into_response())
        .collect::<Result<Vec<_>, _>>()
        .map(Json)
}

pub async fn get_case(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CaseResponse>, ApiError> {
    let case_id = parse_public_id(&id)?;
    let case = app_state
        .case_repository
        .find_by_id(&case_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Case {} not found", id)))?;
    Ok(Json(case.into_response()?))
}

pub async fn update_case(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CaseUpdate>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let case_id = parse_public_id(&id)?;
    payload.validate()?;

    let fields = payload.set_document();
    // An empty patch is a no-op, answered without a store round trip.
    if fields.is_empty() {
        return Ok(Json(UpdatedResponse { updated: false }));
    }

    let matched = app_state
        .case_repository
        .update_fields(&case_id, fields)
        .await?;
    if matched == 0 {
        return Err(ApiError::not_found(format!("Case {} not found", id)));
    }
    Ok(Json(UpdatedResponse { updated: true }))
}
