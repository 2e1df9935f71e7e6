use anyhow::{Context, Result};
use serde_dynamo::Item;

pub async fn put_item(client: &aws_sdk_dynamodb::Client, table: &str, item: Item) -> Result<()> {
    client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .send()
        .await
        .context("could not put item, dynamodb")?;

    Ok(())
}
