use anyhow::Context;
pub use viewer_env::Environment;

#[derive(Debug, Clone)]
pub struct Config {
    /// self explanatory
    pub environment: Environment,
    /// port (8080)
    pub port: usize,
    /// the table holding project metadata records
    pub projects_table: String,
    /// global secondary index on the projects table keyed by project id
    pub project_id_index: String,
    /// s3 bucket holding floorplan documents
    pub floorplan_bucket: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = Environment::new_or_prod();
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;
        let projects_table = std::env::var("PROJECTS_TABLE_NAME")
            .context("PROJECTS_TABLE_NAME must be provided")?;

        let project_id_index =
            std::env::var("PROJECT_ID_INDEX_NAME").unwrap_or("project_id_index".to_string());

        let floorplan_bucket = std::env::var("FLOORPLAN_STORAGE_BUCKET")
            .context("FLOORPLAN_STORAGE_BUCKET must be provided")?;

        Ok(Config {
            environment,
            port,
            projects_table,
            project_id_index,
            floorplan_bucket,
        })
    }
}
