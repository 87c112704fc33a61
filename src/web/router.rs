//! Router configuration for Web API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::FILES_URL_PREFIX;
use super::handlers::{
    create_course, create_material, get_course, get_material_by_name, get_material_type,
    list_course_categories, list_course_levels, list_courses, list_material_types,
    list_materials_by_type, AppState,
};
use super::middleware::create_cors_layer;
use super::openapi::ApiDoc;
use crate::file::{FileStorage, MATERIALS_DIR, THUMBNAILS_DIR};

/// Room for multipart boundaries and text fields on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let body_limit = app_state.max_upload_size.saturating_add(FORM_OVERHEAD_BYTES);

    let course_routes = Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/:id", get(get_course))
        .route("/course-levels", get(list_course_levels))
        .route("/course-categories", get(list_course_categories));

    let material_routes = Router::new()
        .route("/materials", post(create_material))
        .route("/topics/:topic_id/materials", get(get_material_by_name))
        .route(
            "/topics/:topic_id/materials/types/:material_type_id",
            get(list_materials_by_type),
        )
        .route("/material-types", get(list_material_types))
        .route("/material-types/:id", get(get_material_type));

    let api_routes = Router::new()
        .merge(course_routes)
        .merge(material_routes)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Create the router serving stored uploads.
pub fn create_files_router(storage: &FileStorage) -> Router {
    Router::new()
        .nest_service(
            &format!("{FILES_URL_PREFIX}/{MATERIALS_DIR}"),
            ServeDir::new(storage.materials_dir()),
        )
        .nest_service(
            &format!("{FILES_URL_PREFIX}/{THUMBNAILS_DIR}"),
            ServeDir::new(storage.thumbnails_dir()),
        )
}

/// Assemble the full application: API, health, docs and file serving.
pub fn create_app(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let files = create_files_router(&app_state.storage);

    create_router(app_state, cors_origins)
        .merge(create_health_router())
        .merge(create_swagger_router())
        .merge(files)
        .layer(CompressionLayer::new())
}
