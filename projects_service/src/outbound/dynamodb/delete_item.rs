use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

pub async fn delete_item(
    client: &Client,
    table: &str,
    owner: &str,
    project_id: &str,
) -> Result<()> {
    client
        .delete_item()
        .table_name(table)
        .key("owner", AttributeValue::S(owner.to_owned()))
        .key("project_id", AttributeValue::S(project_id.to_owned()))
        .send()
        .await
        .context("failed to delete item from projects table")?;

    Ok(())
}
