use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::{
    error::ApiError,
    models::{CreatedResponse, EvidenceCreate, EvidenceResponse},
    utils::{parse_public_id, public_id},
    AppState,
};

const DEFAULT_EVIDENCE_LIMIT: i64 = 200;

#[derive(Debug, Deserialize)]
pub struct EvidenceListParams {
    #[serde(default)]
    pub limit: Option<i64>,
}

pub async fn add_evidence(
    State(app_state): State<AppState>,
    Json(payload): Json<EvidenceCreate>,
) -> Result<Json<CreatedResponse>, ApiError> {
    // The owning case must exist before anything is written. The check and
    // the insert are two separate store operations; a case removed between
    // them would orphan the record (no deletion path exists today).
    let case_id = parse_public_id(&payload.case_id)?;
    app_state
        .case_repository
        .find_by_id(&case_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Case {} not found", payload.case_id)))?;

    let evidence = payload.into_evidence();
    let id = app_state.evidence_repository.insert(&evidence).await?;
    Ok(Json(CreatedResponse { id: public_id(&id) }))
}

pub async fn list_evidence_by_case(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<EvidenceListParams>,
) -> Result<Json<Vec<EvidenceResponse>>, ApiError> {
    // Evidence stores the owning case id in public string form, so the path
    // segment filters by plain string equality, no translation needed.
    let limit = params.limit.unwrap_or(DEFAULT_EVIDENCE_LIMIT);
    let records = app_state.evidence_repository.find_by_case(&id, limit).await?;
    records
        .into_iter()
        .map(|evidence| evidence.into_response())
        .collect::<Result<Vec<_>, _>>()
        .map(Json)
}
