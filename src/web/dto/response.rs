//! Response DTOs for Web API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::course::{Course, CourseCategory, CourseLevel};
use crate::file::{MATERIALS_DIR, THUMBNAILS_DIR};
use crate::material::{Material, MaterialType};

/// URL prefix stored uploads are served under.
pub const FILES_URL_PREFIX: &str = "/files";

/// Public URL of a stored upload.
pub fn file_url(kind_dir: &str, stored_name: &str) -> String {
    format!("{FILES_URL_PREFIX}/{kind_dir}/{stored_name}")
}

// ============================================================================
// Generic Response Wrappers
// ============================================================================

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Course Responses
// ============================================================================

/// Course response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    /// Course ID.
    pub id: String,
    /// Course title.
    pub title: String,
    /// Level ID.
    pub level_id: i64,
    /// Category ID.
    pub category_id: String,
    /// Description.
    pub description: String,
    /// Duration in hours.
    pub duration: i64,
    /// Thumbnail URL, if a thumbnail was uploaded.
    pub thumbnail_url: Option<String>,
    /// Whether the course is active.
    pub is_active: bool,
    /// Whether the course is available.
    pub is_available: bool,
    /// Creator.
    pub created_by: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last modifier.
    pub modified_by: String,
    /// Last modification timestamp (RFC 3339).
    pub modified_at: String,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            thumbnail_url: c.thumbnail.as_deref().map(|t| file_url(THUMBNAILS_DIR, t)),
            id: c.id,
            title: c.title,
            level_id: c.level_id,
            category_id: c.category_id,
            description: c.description,
            duration: c.duration,
            is_active: c.is_active,
            is_available: c.is_available,
            created_by: c.created_by,
            created_at: c.created_at,
            modified_by: c.modified_by,
            modified_at: c.modified_at,
        }
    }
}

/// Course level response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseLevelResponse {
    /// Level ID.
    pub level_id: i64,
    /// Level name.
    pub name: String,
}

impl From<CourseLevel> for CourseLevelResponse {
    fn from(l: CourseLevel) -> Self {
        Self {
            level_id: l.id,
            name: l.name,
        }
    }
}

/// Course category response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseCategoryResponse {
    /// Category ID.
    pub category_id: String,
    /// Category name.
    pub name: String,
}

impl From<CourseCategory> for CourseCategoryResponse {
    fn from(c: CourseCategory) -> Self {
        Self {
            category_id: c.id,
            name: c.name,
        }
    }
}

// ============================================================================
// Material Responses
// ============================================================================

/// Material response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MaterialResponse {
    /// Material ID.
    pub id: String,
    /// Topic ID.
    pub topic_id: String,
    /// Material type ID.
    pub material_type_id: String,
    /// Material name.
    pub name: String,
    /// Stored file name.
    pub file_path: String,
    /// Public URL of the file.
    pub file_url: String,
    /// Duration in minutes.
    pub duration: i64,
    /// Whether the material is active.
    pub is_active: bool,
    /// Whether the material is available.
    pub is_available: bool,
    /// Creator.
    pub created_by: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last modifier.
    pub modified_by: String,
    /// Last modification timestamp (RFC 3339).
    pub modified_at: String,
}

impl From<Material> for MaterialResponse {
    fn from(m: Material) -> Self {
        Self {
            file_url: file_url(MATERIALS_DIR, &m.file_path),
            id: m.id,
            topic_id: m.topic_id,
            material_type_id: m.material_type_id,
            name: m.name,
            file_path: m.file_path,
            duration: m.duration,
            is_active: m.is_active,
            is_available: m.is_available,
            created_by: m.created_by,
            created_at: m.created_at,
            modified_by: m.modified_by,
            modified_at: m.modified_at,
        }
    }
}

/// Material type response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MaterialTypeResponse {
    /// Material type ID.
    pub material_type_id: String,
    /// Type name.
    pub name: String,
}

impl From<MaterialType> for MaterialTypeResponse {
    fn from(t: MaterialType) -> Self {
        Self {
            material_type_id: t.id,
            name: t.name,
        }
    }
}
