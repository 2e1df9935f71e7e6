pub mod context;
mod cors;
mod health;
pub mod projects;
mod swagger;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::context::AppState;
use crate::config::Config;
use crate::domain::services::projects::ProjectServiceImpl;
use crate::outbound::{dynamodb::DynamodbProjects, s3::S3Floorplans};

// Floorplan documents can run to a few megabytes.
static MAX_REQUEST_SIZE: usize = 10 * 1024 * 1024;

pub async fn setup_and_serve(config: Config) -> anyhow::Result<()> {
    let cors = cors::cors_layer();

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region("us-east-1")
        .load()
        .await;
    let records = DynamodbProjects::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.projects_table.clone(),
        config.project_id_index.clone(),
    );
    let floorplans = S3Floorplans::new(
        aws_sdk_s3::Client::new(&aws_config),
        config.floorplan_bucket.clone(),
    );

    let state = AppState::new(ProjectServiceImpl::new(records, floorplans));

    let port = config.port;
    let environment = config.environment;
    let app = Router::new()
        .merge(
            projects::router().layer(
                ServiceBuilder::new()
                    .layer(axum::middleware::from_fn(viewer_middleware::auth::handler))
                    .layer(cors.clone()),
            ),
        )
        .merge(health::router().layer(cors.clone()))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
        .layer(cors.clone())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_SIZE));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .context("failed to bind service port")?;

    tracing::info!(
        "\nprojects_service\nenvironment: {:?}\nport: {}",
        environment,
        port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}
