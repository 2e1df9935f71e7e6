use anyhow::{Context, Result};
use aws_sdk_dynamodb::{
    Client, types::AttributeAction, types::AttributeValue, types::AttributeValueUpdate,
};
use chrono::{DateTime, SecondsFormat, Utc};

pub async fn touch_updated_at(
    client: &Client,
    table: &str,
    owner: &str,
    project_id: &str,
    at: DateTime<Utc>,
) -> Result<()> {
    let update = AttributeValueUpdate::builder()
        .action(AttributeAction::Put)
        .value(AttributeValue::S(
            at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ))
        .build();

    client
        .update_item()
        .table_name(table)
        .key("owner", AttributeValue::S(owner.to_owned()))
        .key("project_id", AttributeValue::S(project_id.to_owned()))
        .attribute_updates("updated_at", update)
        .send()
        .await
        .context("failed to touch the project's updated_at")?;

    Ok(())
}
