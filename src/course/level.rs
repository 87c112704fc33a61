//! Course levels.

use crate::{LearnError, Result};
use sqlx::SqlitePool;

/// Course level reference row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CourseLevel {
    /// Level ID.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Read-only repository for course levels.
pub struct CourseLevelRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CourseLevelRepository<'a> {
    /// Create a new CourseLevelRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all course levels ordered by ID.
    pub async fn list_all(&self) -> Result<Vec<CourseLevel>> {
        sqlx::query_as::<_, CourseLevel>("SELECT id, name FROM course_levels ORDER BY id")
            .fetch_all(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }

    /// Get a course level by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<CourseLevel>> {
        sqlx::query_as::<_, CourseLevel>("SELECT id, name FROM course_levels WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    #[tokio::test]
    async fn test_list_all_returns_seeded_levels() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = CourseLevelRepository::new(db.pool());

        let levels = repo.list_all().await.unwrap();
        let names: Vec<&str> = levels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Beginner", "Intermediate", "Advanced"]);
        assert_eq!(levels[0].id, 1);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = CourseLevelRepository::new(db.pool());

        let level = repo.get_by_id(2).await.unwrap().unwrap();
        assert_eq!(level.name, "Intermediate");
        assert!(repo.get_by_id(99).await.unwrap().is_none());
    }
}
