use crate::api::projects;
use model::project::*;
use model::response::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
      projects::get_projects::handle_get_projects,
      projects::get_project::handle_get_project,
      projects::save_project::handle_save_project,
      projects::delete_project::handle_delete_project,
      projects::upload_floorplan::handle_upload_floorplan,
    ),
    components(
      schemas(
        ProjectView,
        SaveProjectRequest,
        UploadFloorplanRequest,
        UploadFloorplanResponse,
        ListProjectsResponse,
        GenericSuccessResponse,
        ErrorCode,
        ErrorDetail,
        ErrorEnvelope
      )
    ),
    tags(
      (name = "projects service", description = "Per-user floorplan project storage")
    )
)]
pub struct ApiDoc;
