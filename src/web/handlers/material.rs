//! Material handlers for Web API.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::material::{MaterialRepository, MaterialTypeRepository, TopicRepository};
use crate::web::dto::{ApiResponse, CreateMaterialForm, MaterialNameQuery, MaterialResponse};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::workflow::{CreateWorkflow, StorageGateway};

/// POST /api/materials - Upload a material into a topic.
#[utoipa::path(
    post,
    path = "/api/materials",
    tag = "materials",
    request_body(content = CreateMaterialForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Material created", body = MaterialResponse),
        (status = 400, description = "Invalid request, unknown topic or material type"),
        (status = 412, description = "A material with this name already exists in the topic"),
        (status = 413, description = "Request body too large"),
        (status = 500, description = "Failed to store the file or the material")
    )
)]
pub async fn create_material(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<MaterialResponse>>, ApiError> {
    let form = CreateMaterialForm::from_multipart(multipart, state.max_upload_size).await?;

    let repo = MaterialRepository::new(state.db.pool());
    let material = CreateWorkflow::new(&repo, &state.storage, state.storage.materials_dir())
        .with_write_timeout(state.write_timeout)
        .create(form.into_new_material())
        .await?;

    Ok(Json(ApiResponse::new(material.into())))
}

/// GET /api/topics/:topic_id/materials?name= - Get a material by name.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/materials",
    tag = "materials",
    params(
        ("topic_id" = String, Path, description = "Topic ID"),
        MaterialNameQuery
    ),
    responses(
        (status = 200, description = "Material details", body = MaterialResponse),
        (status = 404, description = "Material not found")
    )
)]
pub async fn get_material_by_name(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
    Query(query): Query<MaterialNameQuery>,
) -> Result<Json<ApiResponse<MaterialResponse>>, ApiError> {
    let repo = MaterialRepository::new(state.db.pool());
    let material = repo
        .find_by_name_and_scope(&query.name, &topic_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get material: {}", e);
            ApiError::internal("Failed to get material")
        })?
        .ok_or_else(|| ApiError::not_found("Material not found"))?;

    Ok(Json(ApiResponse::new(material.into())))
}

/// GET /api/topics/:topic_id/materials/types/:material_type_id - List materials of a type.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/materials/types/{material_type_id}",
    tag = "materials",
    params(
        ("topic_id" = String, Path, description = "Topic ID"),
        ("material_type_id" = String, Path, description = "Material type ID")
    ),
    responses(
        (status = 200, description = "Active materials of the type", body = Vec<MaterialResponse>),
        (status = 404, description = "Topic or material type not found")
    )
)]
pub async fn list_materials_by_type(
    State(state): State<Arc<AppState>>,
    Path((topic_id, material_type_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<MaterialResponse>>>, ApiError> {
    let pool = state.db.pool();

    TopicRepository::new(pool)
        .get_by_id(&topic_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Topic not found"))?;
    MaterialTypeRepository::new(pool)
        .get_by_id(&material_type_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Material type not found"))?;

    let materials = MaterialRepository::new(pool)
        .list_by_scope_and_kind(&topic_id, &material_type_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list materials: {}", e);
            ApiError::internal("Failed to list materials")
        })?;

    Ok(Json(ApiResponse::new(
        materials.into_iter().map(MaterialResponse::from).collect(),
    )))
}
