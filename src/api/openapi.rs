use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::archive::adapter::incoming::web::routes::{ArchiveRecordResponse, ArchiveRequestDto};
use crate::archive::application::domain::entities::EntityKind;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workboard API",
        version = "1.0.0",
        description = "API documentation for the Workboard project-management backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Archive endpoints
        crate::archive::adapter::incoming::web::routes::archive_entity::archive_entity_handler,
        crate::archive::adapter::incoming::web::routes::unarchive_entity::unarchive_entity_handler,
        crate::archive::adapter::incoming::web::routes::list_my_archives::list_my_archives_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ArchiveRecordResponse>,
            ErrorResponse,
            ErrorDetail,

            // Archive DTOs
            ArchiveRequestDto,
            ArchiveRecordResponse,
            EntityKind,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "archive", description = "Per-user archive and restore endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
