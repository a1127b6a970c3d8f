use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, utils::public_id};

/// Status a freshly created case starts in.
pub const STATUS_OPEN: &str = "open";

/// Case document as stored in the `case` collection.
///
/// `status` is an informal enum (`open`, `in_review`, `closed`) kept as an
/// open string: records written with other values must keep deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    #[serde(default)]
    pub allegations: Option<String>,
    #[serde(default)]
    pub reporter_name: Option<String>,
    #[serde(default)]
    pub reporter_contact: Option<String>,
    pub status: String,
    #[serde(default)]
    pub risk_score: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Case {
    /// Client-facing projection with the native `_id` replaced by its
    /// public string form.
    pub fn into_response(self) -> Result<CaseResponse, ApiError> {
        let id = self
            .id
            .ok_or_else(|| ApiError::internal("case document missing _id"))?;
        Ok(CaseResponse {
            id: public_id(&id),
            username: self.username,
            allegations: self.allegations,
            reporter_name: self.reporter_name,
            reporter_contact: self.reporter_contact,
            status: self.status,
            risk_score: self.risk_score,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseCreate {
    pub username: String,
    pub allegations: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_contact: Option<String>,
}

impl CaseCreate {
    pub fn into_case(self) -> Case {
        Case {
            id: None,
            username: self.username,
            allegations: self.allegations,
            reporter_name: self.reporter_name,
            reporter_contact: self.reporter_contact,
            status: STATUS_OPEN.to_string(),
            risk_score: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseUpdate {
    pub status: Option<String>,
    pub notes: Option<String>,
    pub risk_score: Option<i32>,
}

impl CaseUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(score) = self.risk_score {
            validate_risk_score(score)?;
        }
        Ok(())
    }

    /// Build the `$set` document from the supplied fields only; fields not
    /// mentioned stay untouched in the stored record.
    pub fn set_document(&self) -> Document {
        let mut fields = Document::new();
        if let Some(ref status) = self.status {
            fields.insert("status", status.clone());
        }
        if let Some(ref notes) = self.notes {
            fields.insert("notes", notes.clone());
        }
        if let Some(score) = self.risk_score {
            fields.insert("risk_score", score);
        }
        fields
    }
}

pub fn validate_risk_score(score: i32) -> Result<(), ApiError> {
    if !(0..=100).contains(&score) {
        return Err(ApiError::validation(format!(
            "risk_score must be between 0 and 100, got {}",
            score
        )));
    }
    Ok(())
}

/// Exact-match filters for the case listing. Absent or empty values are
/// omitted from the query, not matched against a default.
#[derive(Debug, Clone, Default)]
pub struct CaseFilter {
    pub username: Option<String>,
    pub status: Option<String>,
}

impl CaseFilter {
    pub fn into_document(self) -> Document {
        let mut filter = Document::new();
        if let Some(username) = self.username.filter(|s| !s.is_empty()) {
            filter.insert("username", username);
        }
        if let Some(status) = self.status.filter(|s| !s.is_empty()) {
            filter.insert("status", status);
        }
        filter
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseResponse {
    pub id: String,
    pub username: String,
    pub allegations: Option<String>,
    pub reporter_name: Option<String>,
    pub reporter_contact: Option<String>,
    pub status: String,
    pub risk_score: Option<i32>,
    pub notes: Option<String>,
}
