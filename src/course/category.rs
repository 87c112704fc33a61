//! Course categories.

use crate::{LearnError, Result};
use sqlx::SqlitePool;

/// Course category reference row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CourseCategory {
    /// Category ID (UUID).
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Read-only repository for course categories.
pub struct CourseCategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CourseCategoryRepository<'a> {
    /// Create a new CourseCategoryRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all course categories ordered by name.
    pub async fn list_all(&self) -> Result<Vec<CourseCategory>> {
        sqlx::query_as::<_, CourseCategory>("SELECT id, name FROM course_categories ORDER BY name")
            .fetch_all(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }

    /// Get a course category by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<CourseCategory>> {
        sqlx::query_as::<_, CourseCategory>("SELECT id, name FROM course_categories WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }
}
