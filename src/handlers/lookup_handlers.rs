use axum::{extract::Path, response::Json};

use crate::models::PublicProfile;

/// Public profile lookup via approved sources only.
///
/// Currently a stub: every username answers with the fixed placeholder and
/// the handler never fails and never touches case data.
pub async fn public_lookup(Path(username): Path<String>) -> Json<PublicProfile> {
    Json(PublicProfile::placeholder(username))
}
