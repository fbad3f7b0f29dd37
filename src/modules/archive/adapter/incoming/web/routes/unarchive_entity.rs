// src/modules/archive/adapter/incoming/web/routes/unarchive_entity.rs
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    archive::application::domain::entities::EntityKind,
    archive::application::ports::incoming::use_cases::UnarchiveEntityError,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UnarchiveParamsDto {
    /// Key of the entity to unarchive, as a string
    pub entity_id: String,
    pub entity_type: EntityKind,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/archive/unarchive",
    tag = "archive",
    params(UnarchiveParamsDto),
    responses(
        (status = 200, description = "The caller's archive record was removed"),
        (status = 400, description = "No archive record for this entity and caller"),
        (status = 401, description = "Missing or invalid bearer token"),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/archive/unarchive")]
pub async fn unarchive_entity_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    params: web::Query<UnarchiveParamsDto>,
) -> impl Responder {
    let params = params.into_inner();
    let entity_id = params.entity_id.trim();

    if entity_id.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "entityId must not be empty");
    }

    match data
        .unarchive_entity_use_case
        .execute(params.entity_type, entity_id, UserId::from(user.user_id))
        .await
    {
        Ok(()) => ApiResponse::success_empty(),
        Err(err) => map_unarchive_entity_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_unarchive_entity_error(err: UnarchiveEntityError) -> HttpResponse {
    match err {
        UnarchiveEntityError::ArchiveNotFound => ApiResponse::bad_request(
            "ARCHIVE_NOT_FOUND",
            "No archive record exists for this entity",
        ),
        UnarchiveEntityError::StorageError(msg) => {
            tracing::error!("Unarchive failed on storage error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
