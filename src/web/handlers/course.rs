//! Course handlers for Web API.

use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::course::CourseRepository;
use crate::web::dto::{ApiResponse, CourseListQuery, CourseResponse, CreateCourseForm};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::workflow::{CreateWorkflow, StorageGateway};

/// POST /api/courses - Create a course.
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "courses",
    request_body(content = CreateCourseForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid request"),
        (status = 412, description = "A course with this title already exists"),
        (status = 413, description = "Request body too large"),
        (status = 500, description = "Failed to store the thumbnail or the course")
    )
)]
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let form = CreateCourseForm::from_multipart(multipart, state.max_upload_size).await?;

    let repo = CourseRepository::new(state.db.pool());
    let course = CreateWorkflow::new(&repo, &state.storage, state.storage.thumbnails_dir())
        .with_write_timeout(state.write_timeout)
        .create(form.into_new_course())
        .await?;

    Ok(Json(ApiResponse::new(course.into())))
}

/// GET /api/courses/:id - Get course details.
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "courses",
    params(
        ("id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details", body = CourseResponse),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let repo = CourseRepository::new(state.db.pool());
    let course = repo
        .get_by_id(&course_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get course: {}", e);
            ApiError::internal("Failed to get course")
        })?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    Ok(Json(ApiResponse::new(course.into())))
}

/// GET /api/courses?level_id= - List active courses of a level.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    params(CourseListQuery),
    responses(
        (status = 200, description = "Active courses of the level", body = Vec<CourseResponse>),
        (status = 400, description = "Missing or invalid level_id")
    )
)]
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CourseListQuery>,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, ApiError> {
    let repo = CourseRepository::new(state.db.pool());
    let courses = repo
        .list_by_scope_and_kind(&(), &query.level_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list courses: {}", e);
            ApiError::internal("Failed to list courses")
        })?;

    Ok(Json(ApiResponse::new(
        courses.into_iter().map(CourseResponse::from).collect(),
    )))
}
