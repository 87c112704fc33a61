//! Course repository for learnhub.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::category::CourseCategoryRepository;
use super::level::CourseLevelRepository;
use super::types::{Course, NewCourse};
use crate::workflow::StorageGateway;
use crate::{LearnError, Result};

const COURSE_COLUMNS: &str = "id, title, level_id, category_id, description, duration, thumbnail,
     is_active, is_available, created_by, created_at, modified_by, modified_at";

/// Repository for course persistence.
pub struct CourseRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CourseRepository<'a> {
    /// Create a new CourseRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a course by ID, active or not.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Course>> {
        sqlx::query_as::<_, Course>(&format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }

    /// Count courses with the given title, active or not.
    pub async fn count_by_title(&self, title: &str) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE title = ?")
            .bind(title)
            .fetch_one(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }
}

#[async_trait]
impl<'a> StorageGateway for CourseRepository<'a> {
    type Request = NewCourse;
    type Entity = Course;
    type Scope = ();
    type Kind = i64;

    async fn resolve_references(&self, draft: &NewCourse) -> Result<()> {
        if CourseLevelRepository::new(self.pool)
            .get_by_id(draft.level_id)
            .await?
            .is_none()
        {
            return Err(LearnError::NotFound("course level".to_string()));
        }

        if CourseCategoryRepository::new(self.pool)
            .get_by_id(&draft.category_id)
            .await?
            .is_none()
        {
            return Err(LearnError::NotFound("course category".to_string()));
        }

        Ok(())
    }

    async fn insert(&self, course: &Course) -> Result<()> {
        sqlx::query(
            "INSERT INTO courses (id, title, level_id, category_id, description, duration, thumbnail,
                                  is_active, is_available, created_by, created_at, modified_by, modified_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&course.id)
        .bind(&course.title)
        .bind(course.level_id)
        .bind(&course.category_id)
        .bind(&course.description)
        .bind(course.duration)
        .bind(&course.thumbnail)
        .bind(course.is_active)
        .bind(course.is_available)
        .bind(&course.created_by)
        .bind(&course.created_at)
        .bind(&course.modified_by)
        .bind(&course.modified_at)
        .execute(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_name_and_scope(&self, title: &str, _scope: &()) -> Result<Option<Course>> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE title = ? AND is_active = 1"
        ))
        .bind(title)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))
    }

    async fn exists_by_name_and_scope(&self, title: &str, _scope: &()) -> Result<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE title = ? AND is_active = 1)")
            .bind(title)
            .fetch_one(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }

    async fn list_by_scope_and_kind(&self, _scope: &(), level_id: &i64) -> Result<Vec<Course>> {
        sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses
             WHERE level_id = ? AND is_active = 1
             ORDER BY created_at, title"
        ))
        .bind(level_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))
    }
}
