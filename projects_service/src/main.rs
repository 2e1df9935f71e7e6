use anyhow::Context;
use projects_service::{api, config::Config};
use viewer_entrypoint::ViewerEntrypoint;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ViewerEntrypoint::default().init();

    let config = Config::from_env().context("missing environment variables")?;

    api::setup_and_serve(config).await?;
    Ok(())
}
