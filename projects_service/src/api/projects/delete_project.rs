use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json, response::Response};
use model::response::{ErrorEnvelope, GenericSuccessResponse};
use model::user::UserContext;

use super::{error_response, require_user};
use crate::api::context::AppState;
use crate::domain::ports::ProjectService;

#[derive(serde::Deserialize, Debug)]
pub struct Params {
    pub project_id: String,
}

#[utoipa::path(
    delete,
    path = "/projects/{project_id}",
    params(
        ("project_id" = String, Path, description = "Project ID")
    ),
    responses(
      (status = 200, body = GenericSuccessResponse),
      (status = 401, body = ErrorEnvelope),
      (status = 403, body = ErrorEnvelope),
      (status = 404, body = ErrorEnvelope),
    )
  )
]
#[tracing::instrument(skip(state, usr))]
pub async fn handle_delete_project<P: ProjectService>(
    State(state): State<AppState<P>>,
    usr: Option<Extension<UserContext>>,
    Path(Params { project_id }): Path<Params>,
) -> Result<Response, Response> {
    let usr = require_user(usr)?;

    state
        .projects
        .delete_project(&usr.user_id, &project_id)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::OK, Json(GenericSuccessResponse::default())).into_response())
}
