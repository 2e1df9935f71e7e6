use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json, response::Response};
use model::project::{UploadFloorplanRequest, UploadFloorplanResponse};
use model::response::ErrorEnvelope;
use model::user::UserContext;

use super::{error_response, invalid_body, require_user};
use crate::api::context::AppState;
use crate::domain::ports::ProjectService;

#[derive(serde::Deserialize, Debug)]
pub struct Params {
    pub project_id: String,
}

#[utoipa::path(
    post,
    path = "/projects/{project_id}/upload",
    params(
        ("project_id" = String, Path, description = "Project ID")
    ),
    request_body = UploadFloorplanRequest,
    responses(
      (status = 200, body = UploadFloorplanResponse),
      (status = 400, body = ErrorEnvelope),
      (status = 401, body = ErrorEnvelope),
      (status = 403, body = ErrorEnvelope),
      (status = 404, body = ErrorEnvelope),
    )
  )
]
#[tracing::instrument(skip(state, usr, body))]
pub async fn handle_upload_floorplan<P: ProjectService>(
    State(state): State<AppState<P>>,
    usr: Option<Extension<UserContext>>,
    Path(Params { project_id }): Path<Params>,
    body: Result<Json<UploadFloorplanRequest>, JsonRejection>,
) -> Result<Response, Response> {
    let usr = require_user(usr)?;
    let Json(request) = body.map_err(invalid_body)?;

    let updated_at = state
        .projects
        .upload_floorplan(&usr.user_id, &project_id, &request.floorspace_json)
        .await
        .map_err(error_response)?;

    Ok((
        StatusCode::OK,
        Json(UploadFloorplanResponse {
            success: true,
            updated_at,
        }),
    )
        .into_response())
}
