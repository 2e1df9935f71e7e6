use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json, response::Response};
use model::project::{ProjectView, SaveProjectRequest};
use model::response::ErrorEnvelope;
use model::user::UserContext;

use super::{error_response, invalid_body, require_user};
use crate::api::context::AppState;
use crate::domain::{models::SaveOutcome, ports::ProjectService};

#[derive(serde::Deserialize, Debug)]
pub struct Params {
    pub project_id: String,
}

#[utoipa::path(
    post,
    path = "/projects/{project_id}",
    params(
        ("project_id" = String, Path, description = "Project ID, or \"new\" for a server-assigned id")
    ),
    request_body = SaveProjectRequest,
    responses(
      (status = 200, body = ProjectView),
      (status = 201, body = ProjectView),
      (status = 400, body = ErrorEnvelope),
      (status = 401, body = ErrorEnvelope),
      (status = 403, body = ErrorEnvelope),
    )
  )
]
#[tracing::instrument(skip(state, usr, body))]
pub async fn handle_save_project<P: ProjectService>(
    State(state): State<AppState<P>>,
    usr: Option<Extension<UserContext>>,
    Path(Params { project_id }): Path<Params>,
    body: Result<Json<SaveProjectRequest>, JsonRejection>,
) -> Result<Response, Response> {
    let usr = require_user(usr)?;
    let Json(request) = body.map_err(invalid_body)?;

    let outcome = state
        .projects
        .save_project(&usr.user_id, &project_id, request)
        .await
        .map_err(error_response)?;

    let response = match outcome {
        SaveOutcome::Created(record) => (StatusCode::CREATED, Json(record.into_view())),
        SaveOutcome::Updated(record) => (StatusCode::OK, Json(record.into_view())),
    };

    Ok(response.into_response())
}
