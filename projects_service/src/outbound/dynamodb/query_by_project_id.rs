use std::collections::HashMap;

use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

/// Looks a project up by id alone through the project id index. Ids are
/// globally unique, so at most one record can match.
pub async fn query_by_project_id(
    client: &Client,
    table: &str,
    index: &str,
    project_id: &str,
) -> Result<Option<HashMap<String, AttributeValue>>> {
    let query_output = client
        .query()
        .table_name(table)
        .index_name(index)
        .key_condition_expression("project_id = :project_id")
        .expression_attribute_values(":project_id", AttributeValue::S(project_id.to_owned()))
        .limit(1)
        .send()
        .await
        .context("failed to query projects table by project id")?;

    Ok(query_output
        .items
        .and_then(|items| items.into_iter().next()))
}
