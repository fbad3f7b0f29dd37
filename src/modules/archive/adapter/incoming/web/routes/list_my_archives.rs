// src/modules/archive/adapter/incoming/web/routes/list_my_archives.rs
use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    archive::adapter::incoming::web::routes::archive_entity::ArchiveRecordResponse,
    archive::application::ports::incoming::use_cases::ListMyArchivesError,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/archive/my-archives",
    tag = "archive",
    responses(
        (status = 200, description = "The caller's archive records, newest first"),
        (status = 401, description = "Missing or invalid bearer token"),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/archive/my-archives")]
pub async fn list_my_archives_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_my_archives_use_case
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(ArchiveRecordResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => map_list_my_archives_error(err),
    }
}

fn map_list_my_archives_error(err: ListMyArchivesError) -> HttpResponse {
    match err {
        ListMyArchivesError::StorageError(msg) => {
            tracing::error!("Listing archives failed on storage error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
