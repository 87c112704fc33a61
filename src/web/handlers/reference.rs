//! Reference data handlers: course levels, course categories, material types.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::course::{CourseCategoryRepository, CourseLevelRepository};
use crate::material::MaterialTypeRepository;
use crate::web::dto::{
    ApiResponse, CourseCategoryResponse, CourseLevelQuery, CourseLevelResponse,
    MaterialTypeResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// GET /api/course-levels - List all course levels.
#[utoipa::path(
    get,
    path = "/api/course-levels",
    tag = "reference",
    params(CourseLevelQuery),
    responses(
        (status = 200, description = "All course levels", body = Vec<CourseLevelResponse>)
    )
)]
pub async fn list_course_levels(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CourseLevelQuery>,
) -> Result<Json<ApiResponse<Vec<CourseLevelResponse>>>, ApiError> {
    tracing::debug!(
        accessed_by = query.accessed_by.as_deref().unwrap_or("anonymous"),
        "Listing course levels"
    );

    let levels = CourseLevelRepository::new(state.db.pool())
        .list_all()
        .await
        .map_err(|e| {
            tracing::error!("Failed to list course levels: {}", e);
            ApiError::internal("Failed to list course levels")
        })?;

    Ok(Json(ApiResponse::new(
        levels.into_iter().map(CourseLevelResponse::from).collect(),
    )))
}

/// GET /api/course-categories - List all course categories.
#[utoipa::path(
    get,
    path = "/api/course-categories",
    tag = "reference",
    responses(
        (status = 200, description = "All course categories", body = Vec<CourseCategoryResponse>)
    )
)]
pub async fn list_course_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CourseCategoryResponse>>>, ApiError> {
    let categories = CourseCategoryRepository::new(state.db.pool())
        .list_all()
        .await
        .map_err(|e| {
            tracing::error!("Failed to list course categories: {}", e);
            ApiError::internal("Failed to list course categories")
        })?;

    Ok(Json(ApiResponse::new(
        categories
            .into_iter()
            .map(CourseCategoryResponse::from)
            .collect(),
    )))
}

/// GET /api/material-types - List all material types.
#[utoipa::path(
    get,
    path = "/api/material-types",
    tag = "reference",
    responses(
        (status = 200, description = "All material types", body = Vec<MaterialTypeResponse>)
    )
)]
pub async fn list_material_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<MaterialTypeResponse>>>, ApiError> {
    let types = MaterialTypeRepository::new(state.db.pool())
        .list_all()
        .await
        .map_err(|e| {
            tracing::error!("Failed to list material types: {}", e);
            ApiError::internal("Failed to list material types")
        })?;

    Ok(Json(ApiResponse::new(
        types.into_iter().map(MaterialTypeResponse::from).collect(),
    )))
}

/// GET /api/material-types/:id - Get a material type.
#[utoipa::path(
    get,
    path = "/api/material-types/{id}",
    tag = "reference",
    params(
        ("id" = String, Path, description = "Material type ID")
    ),
    responses(
        (status = 200, description = "Material type", body = MaterialTypeResponse),
        (status = 404, description = "Material type not found")
    )
)]
pub async fn get_material_type(
    State(state): State<Arc<AppState>>,
    Path(material_type_id): Path<String>,
) -> Result<Json<ApiResponse<MaterialTypeResponse>>, ApiError> {
    let material_type = MaterialTypeRepository::new(state.db.pool())
        .get_by_id(&material_type_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Material type not found"))?;

    Ok(Json(ApiResponse::new(material_type.into())))
}
