use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A user-owned project as returned by the API
#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    /// The id of the project
    pub project_id: String,
    /// The name of the project
    pub name: String,
    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The time the project was created
    pub created_at: DateTime<Utc>,
    /// The time the project was last updated
    pub updated_at: DateTime<Utc>,
    /// Expiring url for reading the project's floorplan document.
    /// Only present on single-project reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floorspace_url: Option<String>,
}

/// Body for creating or updating a project's metadata
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SaveProjectRequest {
    /// The name of the project, must be non-empty after trimming
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
}

/// Body for replacing a project's floorplan document
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadFloorplanRequest {
    /// The floorplan document. Opaque to this service beyond being valid JSON.
    pub floorspace_json: Value,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ListProjectsResponse {
    pub projects: Vec<ProjectView>,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadFloorplanResponse {
    /// Indicates if the request was successful
    pub success: bool,
    /// The new updated-at timestamp of the project
    pub updated_at: DateTime<Utc>,
}
