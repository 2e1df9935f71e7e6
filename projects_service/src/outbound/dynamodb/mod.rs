mod delete_item;
mod get_item;
mod put_item;
mod query_by_owner;
mod query_by_project_id;
mod touch_updated_at;

use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use chrono::{DateTime, Utc};
use serde_dynamo::{Item, from_item, to_item};

use super::StoreError;
use crate::domain::{models::ProjectRecord, ports::ProjectStore};

/// Project records table access.
///
/// The table is keyed by `owner` (hash) and `project_id` (range), with a
/// global secondary index keyed by `project_id` alone for the id-only lookup.
#[derive(Debug, Clone)]
pub struct DynamodbProjects {
    client: Client,
    table: String,
    project_id_index: String,
}

impl DynamodbProjects {
    pub fn new(client: Client, table: String, project_id_index: String) -> Self {
        DynamodbProjects {
            client,
            table,
            project_id_index,
        }
    }

    #[tracing::instrument(skip(self, record), fields(project_id = %record.project_id))]
    async fn put_record(&self, record: &ProjectRecord) -> Result<()> {
        let item: Item = to_item(record).context("failed to convert project record")?;
        put_item::put_item(&self.client, &self.table, item).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_record(&self, owner: &str, project_id: &str) -> Result<Option<ProjectRecord>> {
        let item = get_item::get_project_by_key(&self.client, &self.table, owner, project_id)
            .await?;
        item.map(|data| from_item(data).context("failed to deserialize project record"))
            .transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn query_by_project_id(&self, project_id: &str) -> Result<Option<ProjectRecord>> {
        let item = query_by_project_id::query_by_project_id(
            &self.client,
            &self.table,
            &self.project_id_index,
            project_id,
        )
        .await?;
        item.map(|data| from_item(data).context("failed to deserialize project record"))
            .transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn query_by_owner(&self, owner: &str) -> Result<Vec<ProjectRecord>> {
        let items = query_by_owner::query_by_owner(&self.client, &self.table, owner).await?;
        items
            .into_iter()
            .map(|data| from_item(data).context("failed to deserialize project record"))
            .collect()
    }
}

impl ProjectStore for DynamodbProjects {
    type Error = StoreError;

    async fn get(&self, owner: &str, project_id: &str) -> Result<Option<ProjectRecord>, StoreError> {
        Ok(self.get_record(owner, project_id).await?)
    }

    async fn find_any_owner(&self, project_id: &str) -> Result<Option<ProjectRecord>, StoreError> {
        Ok(self.query_by_project_id(project_id).await?)
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<ProjectRecord>, StoreError> {
        Ok(self.query_by_owner(owner).await?)
    }

    async fn put(&self, record: &ProjectRecord) -> Result<(), StoreError> {
        Ok(self.put_record(record).await?)
    }

    async fn touch_updated_at(
        &self,
        owner: &str,
        project_id: &str,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        Ok(
            touch_updated_at::touch_updated_at(&self.client, &self.table, owner, project_id, at)
                .await?,
        )
    }

    async fn delete(&self, owner: &str, project_id: &str) -> Result<(), StoreError> {
        Ok(delete_item::delete_item(&self.client, &self.table, owner, project_id).await?)
    }
}
