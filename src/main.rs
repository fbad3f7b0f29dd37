pub mod api;
pub mod modules;
pub mod shared;
pub use modules::archive;
pub use modules::auth;
pub mod health;

use crate::api::openapi::ApiDoc;
use crate::archive::adapter::outgoing::archive_ledger_postgres::ArchiveLedgerPostgres;
use crate::archive::adapter::outgoing::entity_flags_postgres::{
    MessageFlagsPostgres, ProjectFlagsPostgres, UserFlagsPostgres,
};
use crate::archive::application::domain::entities::EntityKind;
use crate::archive::application::ports::incoming::use_cases::{
    ArchiveEntityUseCase, ListMyArchivesUseCase, UnarchiveEntityUseCase,
};
use crate::archive::application::ports::outgoing::{ArchiveLedger, EntityFlagRegistry};
use crate::archive::application::services::{
    ArchiveEntityService, ListMyArchivesService, UnarchiveEntityService,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub archive_entity_use_case: Arc<dyn ArchiveEntityUseCase + Send + Sync>,
    pub unarchive_entity_use_case: Arc<dyn UnarchiveEntityUseCase + Send + Sync>,
    pub list_my_archives_use_case: Arc<dyn ListMyArchivesUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // One flag repository per archivable kind; the registry is the only
    // place that knows which tables are archivable.
    let flags = EntityFlagRegistry::new()
        .register(
            EntityKind::Project,
            Arc::new(ProjectFlagsPostgres::new(Arc::clone(&db_arc))),
        )
        .register(
            EntityKind::User,
            Arc::new(UserFlagsPostgres::new(Arc::clone(&db_arc))),
        )
        .register(
            EntityKind::Message,
            Arc::new(MessageFlagsPostgres::new(Arc::clone(&db_arc))),
        );

    let ledger: Arc<dyn ArchiveLedger> = Arc::new(ArchiveLedgerPostgres::new(
        Arc::clone(&db_arc),
        flags.clone(),
    ));

    let state = AppState {
        archive_entity_use_case: Arc::new(ArchiveEntityService::new(
            Arc::clone(&ledger),
            flags.clone(),
        )),
        unarchive_entity_use_case: Arc::new(UnarchiveEntityService::new(Arc::clone(&ledger))),
        list_my_archives_use_case: Arc::new(ListMyArchivesService::new(Arc::clone(&ledger))),
    };

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Archive
    cfg.service(crate::archive::adapter::incoming::web::routes::archive_entity_handler);
    cfg.service(crate::archive::adapter::incoming::web::routes::unarchive_entity_handler);
    cfg.service(crate::archive::adapter::incoming::web::routes::list_my_archives_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
