use chrono::{DateTime, Utc};
use model::project::ProjectView;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Path segment in the project id position that requests a server-assigned id.
pub const NEW_PROJECT_SENTINEL: &str = "new";

/// Object name of a project's floorplan document inside its key prefix.
pub const FLOORPLAN_OBJECT_NAME: &str = "floorspace.json";

/// A project metadata record as stored in the projects table.
///
/// `owner` is the partition key and `project_id` the sort key; the id is also
/// queryable on its own through a global secondary index so ownership
/// mismatches can be told apart from records that do not exist.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ProjectRecord {
    pub owner: String,
    pub project_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Key of this project's floorplan document in the blob bucket.
    pub fn floorplan_path(&self) -> String {
        floorplan_path(&self.owner, &self.project_id)
    }

    /// The API view of this record, without a floorplan url.
    pub fn into_view(self) -> ProjectView {
        ProjectView {
            project_id: self.project_id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
            floorspace_url: None,
        }
    }

    /// The API view of this record with an expiring floorplan url attached.
    pub fn into_view_with_url(self, floorspace_url: String) -> ProjectView {
        let mut view = self.into_view();
        view.floorspace_url = Some(floorspace_url);
        view
    }
}

/// Key of a project's floorplan document in the blob bucket.
pub fn floorplan_path(owner: &str, project_id: &str) -> String {
    format!("{owner}/{project_id}/{FLOORPLAN_OBJECT_NAME}")
}

/// The floorplan document every freshly created project starts out with.
pub fn empty_floorplan() -> Value {
    json!({
        "version": "1.0",
        "stories": [],
        "building_units": [],
        "thermal_zones": [],
        "space_types": [],
        "construction_sets": [],
    })
}

/// Whether a save created a new record or updated an existing one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SaveOutcome {
    Created(ProjectRecord),
    Updated(ProjectRecord),
}

impl SaveOutcome {
    pub fn into_record(self) -> ProjectRecord {
        match self {
            SaveOutcome::Created(record) | SaveOutcome::Updated(record) => record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn floorplan_path_is_owner_scoped() {
        assert_eq!(
            floorplan_path("user-a", "p1"),
            "user-a/p1/floorspace.json"
        );
    }

    #[test]
    fn record_round_trips_through_serde() {
        let record = ProjectRecord {
            owner: "user-a".to_string(),
            project_id: "p1".to_string(),
            name: "Lakeside House".to_string(),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("description").is_none());
        let back: ProjectRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
