// src/modules/archive/adapter/incoming/web/routes/archive_entity.rs
use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    archive::application::domain::entities::{ArchiveRecord, EntityKind},
    archive::application::ports::incoming::use_cases::ArchiveEntityError,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRequestDto {
    /// Key of the entity to archive, as a string (`"42"` for projects and
    /// messages, a UUID for users)
    #[schema(example = "42")]
    pub entity_id: String,
    pub entity_type: EntityKind,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRecordResponse {
    pub id: Uuid,
    #[schema(example = "42")]
    pub entity_id: String,
    #[schema(example = "Project")]
    pub entity_type: String,
    pub archived_by: Uuid,
    pub archived_at: DateTime<Utc>,
}

impl From<ArchiveRecord> for ArchiveRecordResponse {
    fn from(record: ArchiveRecord) -> Self {
        Self {
            id: record.id,
            entity_id: record.entity_id,
            entity_type: record.entity_kind.as_str().to_string(),
            archived_by: record.archived_by.value(),
            archived_at: record.archived_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/archive/archive",
    tag = "archive",
    request_body = ArchiveRequestDto,
    responses(
        (status = 200, description = "Entity archived for the calling user"),
        (status = 400, description = "Already archived, entity not found, or invalid payload"),
        (status = 401, description = "Missing or invalid bearer token"),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/archive/archive")]
pub async fn archive_entity_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    body: web::Json<ArchiveRequestDto>,
) -> impl Responder {
    let payload = body.into_inner();
    let entity_id = payload.entity_id.trim();

    if entity_id.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "entityId must not be empty");
    }

    match data
        .archive_entity_use_case
        .execute(payload.entity_type, entity_id, UserId::from(user.user_id))
        .await
    {
        Ok(record) => ApiResponse::success(ArchiveRecordResponse::from(record)),
        Err(err) => map_archive_entity_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_archive_entity_error(err: ArchiveEntityError) -> HttpResponse {
    match err {
        ArchiveEntityError::AlreadyArchived => {
            ApiResponse::bad_request("ALREADY_ARCHIVED", "Entity is already archived")
        }
        ArchiveEntityError::EntityNotFound => {
            ApiResponse::bad_request("ENTITY_NOT_FOUND", "Entity not found")
        }
        ArchiveEntityError::StorageError(msg) => {
            tracing::error!("Archive failed on storage error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
