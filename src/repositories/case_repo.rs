use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::FindOptions;

use crate::{
    database::Store,
    error::ApiError,
    models::{Case, CaseFilter},
};

pub const CASE_COLLECTION: &str = "case";

#[async_trait]
pub trait CaseRepository {
    /// Persist a new case and return its store-assigned identifier.
    async fn insert(&self, case: &Case) -> Result<ObjectId, ApiError>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Case>, ApiError>;
    /// Exact-match listing, capped at `limit`; ordering is store-defined.
    async fn find(&self, filter: CaseFilter, limit: i64) -> Result<Vec<Case>, ApiError>;
    /// Merge only the given fields into the document; returns the matched
    /// count (0 or 1).
    async fn update_fields(&self, id: &ObjectId, fields: Document) -> Result<u64, ApiError>;
}

pub struct MongoCaseRepository {
    store: Store,
}

impl MongoCaseRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CaseRepository for MongoCaseRepository {
    async fn insert(&self, case: &Case) -> Result<ObjectId, ApiError> {
        let collection = self.store.collection::<Case>(CASE_COLLECTION)?;
        let result = collection.insert_one(case, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal("store returned a non-ObjectId insert id"))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Case>, ApiError> {
        let collection = self.store.collection::<Case>(CASE_COLLECTION)?;
        Ok(collection.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn find(&self, filter: CaseFilter, limit: i64) -> Result<Vec<Case>, ApiError> {
        let collection = self.store.collection::<Case>(CASE_COLLECTION)?;
        let options = FindOptions::builder().limit(limit).build();
        let mut cursor = collection.find(filter.into_document(), options).await?;

        let mut cases = Vec::new();
        while let Some(case) = cursor.try_next().await? {
            cases.push(case);
        }
        Ok(cases)
    }

    async fn update_fields(&self, id: &ObjectId, fields: Document) -> Result<u64, ApiError> {
        let collection = self.store.collection::<Case>(CASE_COLLECTION)?;
        let result = collection
            .update_one(doc! { "_id": *id }, doc! { "$set": fields }, None)
            .await?;
        Ok(result.matched_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::CaseCreate;

    #[tokio::test]
    async fn degraded_store_fails_every_operation() {
        let repo = MongoCaseRepository::new(Store::unavailable());
        let case = CaseCreate {
            username: "scammer123".to_string(),
            allegations: None,
            reporter_name: None,
            reporter_contact: None,
        }
        .into_case();

        assert!(matches!(
            repo.insert(&case).await,
            Err(ApiError::StoreUnavailable)
        ));
        assert!(matches!(
            repo.find_by_id(&ObjectId::new()).await,
            Err(ApiError::StoreUnavailable)
        ));
        assert!(matches!(
            repo.find(CaseFilter::default(), 50).await,
            Err(ApiError::StoreUnavailable)
        ));
        assert!(matches!(
            repo.update_fields(&ObjectId::new(), doc! { "status": "closed" })
                .await,
            Err(ApiError::StoreUnavailable)
        ));
    }

    async fn live_store() -> Store {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for live tests");
        let settings = Settings {
            database_url: Some(url),
            database_name: "casetrack_test".to_string(),
            port: 0,
            cors_allow_origins: vec!["*".to_string()],
            log_level: "error".to_string(),
            log_format: "plain".to_string(),
        };
        Store::connect(&settings).await
    }

    fn sample_case(username: &str) -> Case {
        CaseCreate {
            username: username.to_string(),
            allegations: Some("fake shop".to_string()),
            reporter_name: None,
            reporter_contact: None,
        }
        .into_case()
    }

    #[tokio::test]
    #[ignore = "requires a running MongoDB instance"]
    async fn insert_then_find_round_trip() {
        let repo = MongoCaseRepository::new(live_store().await);

        let id = repo.insert(&sample_case("roundtrip_user")).await.unwrap();
        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.username, "roundtrip_user");
        assert_eq!(found.status, "open");
        assert_eq!(found.id, Some(id));

        let missing = repo.find_by_id(&ObjectId::new()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    #[ignore = "requires a running MongoDB instance"]
    async fn partial_update_leaves_other_fields_untouched() {
        let repo = MongoCaseRepository::new(live_store().await);

        let id = repo.insert(&sample_case("partial_update_user")).await.unwrap();
        let matched = repo
            .update_fields(&id, doc! { "notes": "first pass done" })
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.notes.as_deref(), Some("first pass done"));
        assert_eq!(found.status, "open");
        assert_eq!(found.risk_score, None);

        let matched = repo
            .update_fields(&ObjectId::new(), doc! { "status": "closed" })
            .await
            .unwrap();
        assert_eq!(matched, 0);
    }

    #[tokio::test]
    #[ignore = "requires a running MongoDB instance"]
    async fn listing_respects_filters_and_limit() {
        let repo = MongoCaseRepository::new(live_store().await);

        let unique = format!("filter_user_{}", ObjectId::new().to_hex());
        for _ in 0..3 {
            repo.insert(&sample_case(&unique)).await.unwrap();
        }

        let filter = CaseFilter {
            username: Some(unique.clone()),
            status: None,
        };
        let all = repo.find(filter.clone(), 50).await.unwrap();
        assert_eq!(all.len(), 3);

        let capped = repo.find(filter, 2).await.unwrap();
        assert_eq!(capped.len(), 2);
    }
}
