use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json, response::Response};
use model::project::{ListProjectsResponse, ProjectView};
use model::response::ErrorEnvelope;
use model::user::UserContext;

use super::{error_response, require_user};
use crate::api::context::AppState;
use crate::domain::{models::ProjectRecord, ports::ProjectService};

#[utoipa::path(
    get,
    path = "/projects",
    responses(
      (status = 200, body = ListProjectsResponse),
      (status = 401, body = ErrorEnvelope),
    )
  )
]
#[tracing::instrument(skip(state, usr))]
pub async fn handle_get_projects<P: ProjectService>(
    State(state): State<AppState<P>>,
    usr: Option<Extension<UserContext>>,
) -> Result<Response, Response> {
    let usr = require_user(usr)?;

    let records = state
        .projects
        .list_projects(&usr.user_id)
        .await
        .map_err(error_response)?;

    let projects: Vec<ProjectView> = records.into_iter().map(ProjectRecord::into_view).collect();
    let count = projects.len();

    Ok((StatusCode::OK, Json(ListProjectsResponse { projects, count })).into_response())
}
