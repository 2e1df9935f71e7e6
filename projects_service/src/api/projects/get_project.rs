use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json, response::Response};
use model::project::ProjectView;
use model::response::ErrorEnvelope;
use model::user::UserContext;

use super::{error_response, require_user};
use crate::api::context::AppState;
use crate::domain::ports::ProjectService;

#[derive(serde::Deserialize, Debug)]
pub struct Params {
    pub project_id: String,
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}",
    params(
        ("project_id" = String, Path, description = "Project ID")
    ),
    responses(
      (status = 200, body = ProjectView),
      (status = 401, body = ErrorEnvelope),
      (status = 403, body = ErrorEnvelope),
      (status = 404, body = ErrorEnvelope),
    )
  )
]
#[tracing::instrument(skip(state, usr))]
pub async fn handle_get_project<P: ProjectService>(
    State(state): State<AppState<P>>,
    usr: Option<Extension<UserContext>>,
    Path(Params { project_id }): Path<Params>,
) -> Result<Response, Response> {
    let usr = require_user(usr)?;

    let (record, floorspace_url) = state
        .projects
        .get_project(&usr.user_id, &project_id)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::OK,
        Json(record.into_view_with_url(floorspace_url)),
    )
        .into_response())
}
