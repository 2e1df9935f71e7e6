use std::collections::HashMap;

use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

/// Queries every record under an owner partition, following pagination until
/// the table reports no further pages.
pub async fn query_by_owner(
    client: &Client,
    table: &str,
    owner: &str,
) -> Result<Vec<HashMap<String, AttributeValue>>> {
    let mut items: Vec<HashMap<String, AttributeValue>> = Vec::new();
    let mut last_evaluated_key: Option<HashMap<String, AttributeValue>> = None;

    loop {
        let query_output = client
            .query()
            .table_name(table)
            // "owner" needs aliasing inside expressions
            .key_condition_expression("#owner = :owner")
            .expression_attribute_names("#owner", "owner")
            .expression_attribute_values(":owner", AttributeValue::S(owner.to_owned()))
            .set_exclusive_start_key(last_evaluated_key)
            .send()
            .await
            .context("failed to query projects table by owner")?;

        if let Some(page) = query_output.items {
            items.extend(page);
        }

        last_evaluated_key = query_output.last_evaluated_key;
        if last_evaluated_key.is_none() {
            break;
        }
    }

    Ok(items)
}
