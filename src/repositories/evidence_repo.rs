use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::FindOptions;

use crate::{database::Store, error::ApiError, models::Evidence};

pub const EVIDENCE_COLLECTION: &str = "evidence";

#[async_trait]
pub trait EvidenceRepository {
    /// Persist a new evidence record and return its store-assigned
    /// identifier. The caller is responsible for the owning-case existence
    /// check; the two operations are not atomic.
    async fn insert(&self, evidence: &Evidence) -> Result<ObjectId, ApiError>;
    /// All evidence whose stored `case_id` string equals `case_id`, capped
    /// at `limit`; ordering is store-defined.
    async fn find_by_case(&self, case_id: &str, limit: i64) -> Result<Vec<Evidence>, ApiError>;
}

pub struct MongoEvidenceRepository {
    store: Store,
}

impl MongoEvidenceRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EvidenceRepository for MongoEvidenceRepository {
    async fn insert(&self, evidence: &Evidence) -> Result<ObjectId, ApiError> {
        let collection = self.store.collection::<Evidence>(EVIDENCE_COLLECTION)?;
        let result = collection.insert_one(evidence, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal("store returned a non-ObjectId insert id"))
    }

    async fn find_by_case(&self, case_id: &str, limit: i64) -> Result<Vec<Evidence>, ApiError> {
        let collection = self.store.collection::<Evidence>(EVIDENCE_COLLECTION)?;
        let options = FindOptions::builder().limit(limit).build();
        let mut cursor = collection
            .find(doc! { "case_id": case_id }, options)
            .await?;

        let mut records = Vec::new();
        while let Some(evidence) = cursor.try_next().await? {
            records.push(evidence);
        }
        Ok(records)
    }
}
