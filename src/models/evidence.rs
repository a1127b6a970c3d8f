use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, utils::public_id};

/// Evidence document as stored in the `evidence` collection.
///
/// `case_id` holds the owning case's public id in string form; the evidence
/// listing filters on it by plain string equality. `type` is a free-form
/// category (screenshot, link, payment_proof, chat_log, other, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub case_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Evidence {
    pub fn into_response(self) -> Result<EvidenceResponse, ApiError> {
        let id = self
            .id
            .ok_or_else(|| ApiError::internal("evidence document missing _id"))?;
        Ok(EvidenceResponse {
            id: public_id(&id),
            case_id: self.case_id,
            kind: self.kind,
            url: self.url,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceCreate {
    pub case_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

impl EvidenceCreate {
    pub fn into_evidence(self) -> Evidence {
        Evidence {
            id: None,
            case_id: self.case_id,
            kind: self.kind,
            url: self.url,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvidenceResponse {
    pub id: String,
    pub case_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub description: Option<String>,
}
