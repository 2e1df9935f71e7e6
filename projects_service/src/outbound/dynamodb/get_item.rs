use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

pub async fn get_project_by_key(
    client: &Client,
    table: &str,
    owner: &str,
    project_id: &str,
) -> Result<Option<HashMap<String, AttributeValue>>> {
    Ok(client
        .get_item()
        .table_name(table)
        .key("owner", AttributeValue::S(owner.to_owned()))
        .key("project_id", AttributeValue::S(project_id.to_owned()))
        .send()
        .await
        .context("failed to get item from projects table")?
        .item()
        .map(|v| v.to_owned()))
}
