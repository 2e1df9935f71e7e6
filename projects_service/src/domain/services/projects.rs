use anyhow::Context;
use chrono::{DateTime, Utc};
use model::project::SaveProjectRequest;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    error::{ProjectError, Result},
    models::{NEW_PROJECT_SENTINEL, ProjectRecord, SaveOutcome, empty_floorplan},
    ports::{FloorplanStore, ProjectService, ProjectStore},
};

/// [ProjectService] over a record store and a floorplan store.
#[derive(Debug, Clone)]
pub struct ProjectServiceImpl<S, B> {
    records: S,
    floorplans: B,
}

impl<S, B> ProjectServiceImpl<S, B>
where
    S: ProjectStore,
    B: FloorplanStore,
{
    pub fn new(records: S, floorplans: B) -> Self {
        Self { records, floorplans }
    }

    fn require_subject(owner: &str) -> Result<()> {
        if owner.is_empty() {
            return Err(ProjectError::Unauthenticated);
        }
        Ok(())
    }

    /// Resolves a project id to a record the caller owns.
    ///
    /// A miss under the caller's partition falls back to an id-only lookup:
    /// a hit under another owner is `Forbidden`, no hit at all is `NotFound`.
    async fn find_owned(&self, owner: &str, project_id: &str) -> Result<ProjectRecord> {
        if let Some(record) = self
            .records
            .get(owner, project_id)
            .await
            .map_err(anyhow::Error::from)?
        {
            return Ok(record);
        }

        match self
            .records
            .find_any_owner(project_id)
            .await
            .map_err(anyhow::Error::from)?
        {
            Some(record) if record.owner == owner => Ok(record),
            Some(_) => Err(ProjectError::Forbidden),
            None => Err(ProjectError::NotFound),
        }
    }

    async fn create_project(
        &self,
        owner: &str,
        project_id: &str,
        name: String,
        description: Option<String>,
    ) -> Result<ProjectRecord> {
        let now = Utc::now();
        let record = ProjectRecord {
            owner: owner.to_string(),
            project_id: project_id.to_string(),
            name,
            description,
            created_at: now,
            updated_at: now,
        };

        // Record before blob: a crash in between leaves a record whose
        // missing document reads as empty, which the next upload replaces.
        self.records
            .put(&record)
            .await
            .map_err(anyhow::Error::from)?;

        let body = serde_json::to_vec(&empty_floorplan())
            .context("unable to serialize the empty floorplan document")?;
        self.floorplans
            .put(&record.floorplan_path(), body)
            .await
            .map_err(anyhow::Error::from)?;

        Ok(record)
    }
}

impl<S, B> ProjectService for ProjectServiceImpl<S, B>
where
    S: ProjectStore,
    B: FloorplanStore,
    anyhow::Error: From<S::Error> + From<B::Error>,
{
    #[tracing::instrument(skip(self))]
    async fn list_projects(&self, owner: &str) -> Result<Vec<ProjectRecord>> {
        Self::require_subject(owner)?;

        let records = self
            .records
            .list_by_owner(owner)
            .await
            .map_err(anyhow::Error::from)?;
        Ok(records)
    }

    #[tracing::instrument(skip(self))]
    async fn get_project(&self, owner: &str, project_id: &str) -> Result<(ProjectRecord, String)> {
        Self::require_subject(owner)?;

        let record = self.find_owned(owner, project_id).await?;
        let url = self
            .floorplans
            .presigned_get_url(&record.floorplan_path())
            .await
            .map_err(anyhow::Error::from)?;

        Ok((record, url))
    }

    #[tracing::instrument(skip(self, request))]
    async fn save_project(
        &self,
        owner: &str,
        project_id: &str,
        request: SaveProjectRequest,
    ) -> Result<SaveOutcome> {
        Self::require_subject(owner)?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(ProjectError::Validation(
                "name must be a non-empty string".to_string(),
            ));
        }
        let name = name.to_string();

        if project_id == NEW_PROJECT_SENTINEL {
            let project_id = Uuid::now_v7().to_string();
            let record = self
                .create_project(owner, &project_id, name, request.description)
                .await?;
            return Ok(SaveOutcome::Created(record));
        }

        match self.find_owned(owner, project_id).await {
            Ok(mut record) => {
                record.name = name;
                record.description = request.description;
                record.updated_at = Utc::now();
                self.records
                    .put(&record)
                    .await
                    .map_err(anyhow::Error::from)?;
                Ok(SaveOutcome::Updated(record))
            }
            Err(ProjectError::NotFound) => {
                let record = self
                    .create_project(owner, project_id, name, request.description)
                    .await?;
                Ok(SaveOutcome::Created(record))
            }
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete_project(&self, owner: &str, project_id: &str) -> Result<()> {
        Self::require_subject(owner)?;

        let record = self.find_owned(owner, project_id).await?;

        // Blob before record: a crash in between leaves a record the caller
        // can retry the delete on, never an orphaned document.
        self.floorplans
            .delete(&record.floorplan_path())
            .await
            .map_err(anyhow::Error::from)?;
        self.records
            .delete(&record.owner, &record.project_id)
            .await
            .map_err(anyhow::Error::from)?;

        Ok(())
    }

    #[tracing::instrument(skip(self, floorspace_json))]
    async fn upload_floorplan(
        &self,
        owner: &str,
        project_id: &str,
        floorspace_json: &Value,
    ) -> Result<DateTime<Utc>> {
        Self::require_subject(owner)?;

        let record = self.find_owned(owner, project_id).await?;

        let body = serde_json::to_vec(floorspace_json)
            .context("unable to serialize the floorplan document")?;
        self.floorplans
            .put(&record.floorplan_path(), body)
            .await
            .map_err(anyhow::Error::from)?;

        let now = Utc::now();
        self.records
            .touch_updated_at(&record.owner, &record.project_id, now)
            .await
            .map_err(anyhow::Error::from)?;

        Ok(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::testing::{InMemoryFloorplans, InMemoryRecords};

    fn service() -> ProjectServiceImpl<InMemoryRecords, InMemoryFloorplans> {
        ProjectServiceImpl::new(InMemoryRecords::default(), InMemoryFloorplans::default())
    }

    fn save_request(name: &str) -> SaveProjectRequest {
        SaveProjectRequest {
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn create_writes_record_and_empty_floorplan() {
        let svc = service();

        let outcome = svc
            .save_project("user-a", NEW_PROJECT_SENTINEL, save_request("Lakeside"))
            .await
            .unwrap();

        let record = match outcome {
            SaveOutcome::Created(record) => record,
            SaveOutcome::Updated(_) => panic!("expected a creation"),
        };
        assert_eq!(record.owner, "user-a");
        assert_eq!(record.name, "Lakeside");
        assert_eq!(record.created_at, record.updated_at);

        let blob = svc
            .floorplans
            .read(&record.floorplan_path())
            .expect("floorplan document should exist");
        let parsed: Value = serde_json::from_slice(&blob).unwrap();
        assert_eq!(parsed, empty_floorplan());
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let svc = service();

        let a = svc
            .save_project("user-a", NEW_PROJECT_SENTINEL, save_request("One"))
            .await
            .unwrap()
            .into_record();
        let b = svc
            .save_project("user-a", NEW_PROJECT_SENTINEL, save_request("Two"))
            .await
            .unwrap()
            .into_record();

        assert_ne!(a.project_id, b.project_id);
        assert_ne!(a.project_id, NEW_PROJECT_SENTINEL);
    }

    #[tokio::test]
    async fn save_rejects_whitespace_only_name() {
        let svc = service();

        let err = svc
            .save_project("user-a", NEW_PROJECT_SENTINEL, save_request("   "))
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::Validation(_)));
        assert!(svc.records.list_by_owner("user-a").await.unwrap().is_empty());
        assert!(svc.floorplans.is_empty());
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_advances_updated_at() {
        let svc = service();

        let created = svc
            .save_project("user-a", NEW_PROJECT_SENTINEL, save_request("Before"))
            .await
            .unwrap()
            .into_record();

        let outcome = svc
            .save_project(
                "user-a",
                &created.project_id,
                SaveProjectRequest {
                    name: "After".to_string(),
                    description: Some("now with a porch".to_string()),
                },
            )
            .await
            .unwrap();

        let updated = match outcome {
            SaveOutcome::Updated(record) => record,
            SaveOutcome::Created(_) => panic!("expected an update"),
        };
        assert_eq!(updated.name, "After");
        assert_eq!(updated.description.as_deref(), Some("now with a porch"));
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn save_with_explicit_unknown_id_creates() {
        let svc = service();

        let outcome = svc
            .save_project("user-a", "imported-1", save_request("Imported"))
            .await
            .unwrap();

        assert!(matches!(outcome, SaveOutcome::Created(_)));
        let record = svc
            .records
            .get("user-a", "imported-1")
            .await
            .unwrap()
            .expect("record should exist");
        assert_eq!(record.name, "Imported");
    }

    #[tokio::test]
    async fn save_against_foreign_project_is_forbidden() {
        let svc = service();

        let theirs = svc
            .save_project("user-b", NEW_PROJECT_SENTINEL, save_request("Theirs"))
            .await
            .unwrap()
            .into_record();

        let err = svc
            .save_project("user-a", &theirs.project_id, save_request("Takeover"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::Forbidden));
        let untouched = svc
            .records
            .get("user-b", &theirs.project_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(untouched.name, "Theirs");
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_owner() {
        let svc = service();

        svc.save_project("user-a", NEW_PROJECT_SENTINEL, save_request("Mine"))
            .await
            .unwrap();
        svc.save_project("user-b", NEW_PROJECT_SENTINEL, save_request("Not mine"))
            .await
            .unwrap();

        let mine = svc.list_projects("user-a").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "Mine");

        let nobody = svc.list_projects("user-c").await.unwrap();
        assert!(nobody.is_empty());
    }

    #[tokio::test]
    async fn get_returns_record_and_presigned_url() {
        let svc = service();

        let record = svc
            .save_project("user-a", NEW_PROJECT_SENTINEL, save_request("Lakeside"))
            .await
            .unwrap()
            .into_record();

        let (fetched, url) = svc
            .get_project("user-a", &record.project_id)
            .await
            .unwrap();
        assert_eq!(fetched, record);
        assert!(url.contains(&record.floorplan_path()));
    }

    #[tokio::test]
    async fn get_distinguishes_forbidden_from_not_found() {
        let svc = service();

        let theirs = svc
            .save_project("user-b", NEW_PROJECT_SENTINEL, save_request("Theirs"))
            .await
            .unwrap()
            .into_record();

        let forbidden = svc
            .get_project("user-a", &theirs.project_id)
            .await
            .unwrap_err();
        assert!(matches!(forbidden, ProjectError::Forbidden));

        let missing = svc.get_project("user-a", "no-such-id").await.unwrap_err();
        assert!(matches!(missing, ProjectError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_blob_and_record() {
        let svc = service();

        let record = svc
            .save_project("user-a", NEW_PROJECT_SENTINEL, save_request("Doomed"))
            .await
            .unwrap()
            .into_record();
        let path = record.floorplan_path();

        svc.delete_project("user-a", &record.project_id)
            .await
            .unwrap();

        assert!(svc.floorplans.read(&path).is_none());
        assert!(
            svc.records
                .get("user-a", &record.project_id)
                .await
                .unwrap()
                .is_none()
        );

        let again = svc
            .delete_project("user-a", &record.project_id)
            .await
            .unwrap_err();
        assert!(matches!(again, ProjectError::NotFound));
    }

    #[tokio::test]
    async fn delete_against_foreign_project_is_forbidden() {
        let svc = service();

        let theirs = svc
            .save_project("user-b", NEW_PROJECT_SENTINEL, save_request("Theirs"))
            .await
            .unwrap()
            .into_record();

        let err = svc
            .delete_project("user-a", &theirs.project_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Forbidden));
        assert!(svc.floorplans.read(&theirs.floorplan_path()).is_some());
    }

    #[tokio::test]
    async fn upload_replaces_document_and_touches_updated_at() {
        let svc = service();

        let record = svc
            .save_project("user-a", NEW_PROJECT_SENTINEL, save_request("Lakeside"))
            .await
            .unwrap()
            .into_record();

        let document = serde_json::json!({"version": "1.0", "stories": [{"name": "ground"}]});
        let touched = svc
            .upload_floorplan("user-a", &record.project_id, &document)
            .await
            .unwrap();

        let stored = svc.floorplans.read(&record.floorplan_path()).unwrap();
        let parsed: Value = serde_json::from_slice(&stored).unwrap();
        assert_eq!(parsed, document);

        let fetched = svc
            .records
            .get("user-a", &record.project_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.updated_at, touched);
        assert!(touched >= record.updated_at);
    }

    #[tokio::test]
    async fn upload_against_foreign_project_is_forbidden() {
        let svc = service();

        let theirs = svc
            .save_project("user-b", NEW_PROJECT_SENTINEL, save_request("Theirs"))
            .await
            .unwrap()
            .into_record();

        let document = serde_json::json!({"version": "1.0"});
        let err = svc
            .upload_floorplan("user-a", &theirs.project_id, &document)
            .await
            .unwrap_err();
        assert!(matches!(err, ProjectError::Forbidden));

        let untouched: Value =
            serde_json::from_slice(&svc.floorplans.read(&theirs.floorplan_path()).unwrap())
                .unwrap();
        assert_eq!(untouched, empty_floorplan());
    }

    #[tokio::test]
    async fn empty_subject_is_unauthenticated() {
        let svc = service();

        let err = svc.list_projects("").await.unwrap_err();
        assert!(matches!(err, ProjectError::Unauthenticated));
    }
}
