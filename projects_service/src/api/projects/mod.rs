pub mod delete_project;
pub mod get_project;
pub mod get_projects;
pub mod save_project;
pub mod upload_floorplan;


use axum::{
    Extension, Router,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use model::{
    response::{ErrorCode, ErrorEnvelope},
    user::UserContext,
};

use crate::{
    api::context::AppState,
    domain::{error::ProjectError, ports::ProjectService},
};

pub fn router<P: ProjectService>() -> Router<AppState<P>> {
    Router::new()
        .route("/projects", get(get_projects::handle_get_projects::<P>))
        .route(
            "/projects/:project_id",
            get(get_project::handle_get_project::<P>),
        )
        .route(
            "/projects/:project_id",
            post(save_project::handle_save_project::<P>),
        )
        .route(
            "/projects/:project_id",
            delete(delete_project::handle_delete_project::<P>),
        )
        .route(
            "/projects/:project_id/upload",
            post(upload_floorplan::handle_upload_floorplan::<P>),
        )
}

/// 401 when the auth middleware did not attach a caller identity.
fn require_user(usr: Option<Extension<UserContext>>) -> Result<UserContext, Response> {
    match usr {
        Some(Extension(usr)) if !usr.user_id.is_empty() => Ok(usr),
        _ => Err(ErrorEnvelope::new(ErrorCode::Unauthorized, "unauthorized").into_response()),
    }
}

/// Translates a domain failure into the uniform error envelope.
fn error_response(err: ProjectError) -> Response {
    let envelope = match err {
        ProjectError::Unauthenticated => {
            ErrorEnvelope::new(ErrorCode::Unauthorized, "unauthorized")
        }
        ProjectError::Validation(message) => {
            ErrorEnvelope::new(ErrorCode::ValidationError, message)
        }
        ProjectError::Forbidden => ErrorEnvelope::new(ErrorCode::Forbidden, "access denied"),
        ProjectError::NotFound => ErrorEnvelope::new(ErrorCode::NotFound, "project not found"),
        ProjectError::Internal(err) => {
            tracing::error!(error=?err, "project operation failed");
            ErrorEnvelope::new(ErrorCode::InternalError, "internal server error")
        }
    };
    envelope.into_response()
}

/// Translates a body that failed to parse into the uniform error envelope.
fn invalid_body(rejection: axum::extract::rejection::JsonRejection) -> Response {
    tracing::trace!(error=?rejection, "rejected request body");
    ErrorEnvelope::new(ErrorCode::ValidationError, "invalid request body").into_response()
}
