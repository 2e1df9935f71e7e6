//! In-memory store fakes shared by the domain and router tests.

use std::{
    collections::HashMap,
    convert::Infallible,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Utc};

use crate::domain::{
    models::ProjectRecord,
    ports::{FloorplanStore, ProjectStore},
};

/// [ProjectStore] over a hash map keyed by `(owner, project_id)`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRecords {
    records: Arc<Mutex<HashMap<(String, String), ProjectRecord>>>,
}

impl ProjectStore for InMemoryRecords {
    type Error = Infallible;

    async fn get(&self, owner: &str, project_id: &str) -> Result<Option<ProjectRecord>, Infallible> {
        let records = self.records.lock().unwrap();
        Ok(records
            .get(&(owner.to_string(), project_id.to_string()))
            .cloned())
    }

    async fn find_any_owner(&self, project_id: &str) -> Result<Option<ProjectRecord>, Infallible> {
        let records = self.records.lock().unwrap();
        Ok(records
            .values()
            .find(|record| record.project_id == project_id)
            .cloned())
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<ProjectRecord>, Infallible> {
        let records = self.records.lock().unwrap();
        Ok(records
            .values()
            .filter(|record| record.owner == owner)
            .cloned()
            .collect())
    }

    async fn put(&self, record: &ProjectRecord) -> Result<(), Infallible> {
        let mut records = self.records.lock().unwrap();
        records.insert(
            (record.owner.clone(), record.project_id.clone()),
            record.clone(),
        );
        Ok(())
    }

    async fn touch_updated_at(
        &self,
        owner: &str,
        project_id: &str,
        at: DateTime<Utc>,
    ) -> Result<(), Infallible> {
        let mut records = self.records.lock().unwrap();
        if let Some(record) = records.get_mut(&(owner.to_string(), project_id.to_string())) {
            record.updated_at = at;
        }
        Ok(())
    }

    async fn delete(&self, owner: &str, project_id: &str) -> Result<(), Infallible> {
        let mut records = self.records.lock().unwrap();
        records.remove(&(owner.to_string(), project_id.to_string()));
        Ok(())
    }
}

/// [FloorplanStore] over a hash map keyed by blob path.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFloorplans {
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryFloorplans {
    pub fn read(&self, path: &str) -> Option<Vec<u8>> {
        self.blobs.lock().unwrap().get(path).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.lock().unwrap().is_empty()
    }
}

impl FloorplanStore for InMemoryFloorplans {
    type Error = Infallible;

    async fn put(&self, path: &str, body: Vec<u8>) -> Result<(), Infallible> {
        self.blobs.lock().unwrap().insert(path.to_string(), body);
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), Infallible> {
        self.blobs.lock().unwrap().remove(path);
        Ok(())
    }

    async fn presigned_get_url(&self, path: &str) -> Result<String, Infallible> {
        Ok(format!("https://floorplans.test/{path}?signature=stub"))
    }
}
