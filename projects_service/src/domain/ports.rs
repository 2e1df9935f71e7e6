use std::future::Future;

use chrono::{DateTime, Utc};
use model::project::SaveProjectRequest;
use serde_json::Value;

use crate::domain::{
    error::Result,
    models::{ProjectRecord, SaveOutcome},
};

/// Storage port for project metadata records.
///
/// Keyed by `(owner, project_id)`, with an additional lookup by bare
/// `project_id` so the service can distinguish "someone else's project"
/// from "no such project".
pub trait ProjectStore: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(
        &self,
        owner: &str,
        project_id: &str,
    ) -> impl Future<Output = std::result::Result<Option<ProjectRecord>, Self::Error>> + Send;

    /// Looks a project up by id alone, across all owners.
    fn find_any_owner(
        &self,
        project_id: &str,
    ) -> impl Future<Output = std::result::Result<Option<ProjectRecord>, Self::Error>> + Send;

    fn list_by_owner(
        &self,
        owner: &str,
    ) -> impl Future<Output = std::result::Result<Vec<ProjectRecord>, Self::Error>> + Send;

    fn put(
        &self,
        record: &ProjectRecord,
    ) -> impl Future<Output = std::result::Result<(), Self::Error>> + Send;

    /// Rewrites only the `updated_at` attribute of an existing record.
    fn touch_updated_at(
        &self,
        owner: &str,
        project_id: &str,
        at: DateTime<Utc>,
    ) -> impl Future<Output = std::result::Result<(), Self::Error>> + Send;

    fn delete(
        &self,
        owner: &str,
        project_id: &str,
    ) -> impl Future<Output = std::result::Result<(), Self::Error>> + Send;
}

/// Storage port for floorplan documents.
pub trait FloorplanStore: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    fn put(
        &self,
        path: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = std::result::Result<(), Self::Error>> + Send;

    /// Removes the document. Deleting a path that holds no document is not
    /// an error.
    fn delete(&self, path: &str)
    -> impl Future<Output = std::result::Result<(), Self::Error>> + Send;

    /// Mints an expiring url for reading the document at `path`.
    fn presigned_get_url(
        &self,
        path: &str,
    ) -> impl Future<Output = std::result::Result<String, Self::Error>> + Send;
}

/// The operations the HTTP layer drives.
///
/// Every method takes the verified caller identity as `owner`; ownership
/// enforcement happens behind this trait, never in the handlers.
pub trait ProjectService: Send + Sync + 'static {
    fn list_projects(&self, owner: &str)
    -> impl Future<Output = Result<Vec<ProjectRecord>>> + Send;

    /// Fetches one owned project together with an expiring floorplan url.
    fn get_project(
        &self,
        owner: &str,
        project_id: &str,
    ) -> impl Future<Output = Result<(ProjectRecord, String)>> + Send;

    fn save_project(
        &self,
        owner: &str,
        project_id: &str,
        request: SaveProjectRequest,
    ) -> impl Future<Output = Result<SaveOutcome>> + Send;

    fn delete_project(
        &self,
        owner: &str,
        project_id: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Replaces the floorplan document of an owned project and returns the
    /// new `updated_at` timestamp.
    fn upload_floorplan(
        &self,
        owner: &str,
        project_id: &str,
        floorspace_json: &Value,
    ) -> impl Future<Output = Result<DateTime<Utc>>> + Send;
}
