//! Topics: the scope materials are unique within.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{LearnError, Result};

/// Topic entity.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Topic {
    /// Topic ID (UUID v4).
    pub id: String,
    /// Owning course ID.
    pub course_id: String,
    /// Topic name.
    pub name: String,
    /// Topic description.
    pub description: String,
    /// Whether the topic is active.
    pub is_active: bool,
    /// Creator.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Data for creating a new topic.
#[derive(Debug, Clone)]
pub struct NewTopic {
    /// Owning course ID.
    pub course_id: String,
    /// Topic name.
    pub name: String,
    /// Topic description.
    pub description: String,
    /// Creator.
    pub created_by: String,
}

impl NewTopic {
    /// Create a new topic with minimal required fields.
    pub fn new(
        course_id: impl Into<String>,
        name: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
            description: String::new(),
            created_by: created_by.into(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Repository for topics.
pub struct TopicRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TopicRepository<'a> {
    /// Create a new TopicRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new topic under an existing course.
    pub async fn create(&self, new_topic: &NewTopic) -> Result<Topic> {
        let id = Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO topics (id, course_id, name, description, created_by, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&new_topic.course_id)
        .bind(&new_topic.name)
        .bind(&new_topic.description)
        .bind(&new_topic.created_by)
        .bind(&now)
        .execute(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))?;

        self.get_by_id(&id)
            .await?
            .ok_or_else(|| LearnError::NotFound("topic".to_string()))
    }

    /// Get an active topic by ID.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Topic>> {
        sqlx::query_as::<_, Topic>(
            "SELECT id, course_id, name, description, is_active, created_by, created_at
             FROM topics WHERE id = ? AND is_active = 1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::{CourseRepository, NewCourse};
    use crate::workflow::{AuditStamp, Draft, StorageGateway};
    use crate::Database;

    const TECHNICAL: &str = "6f1c2a0e-0b1d-4c39-9a57-1f3e6d2b8c01";

    async fn seed_course(db: &Database) -> String {
        let repo = CourseRepository::new(db.pool());
        let course = NewCourse::new("Intro to Go", 1, TECHNICAL, "admin")
            .into_entity("course-1".to_string(), None, &AuditStamp::now("admin"));
        repo.insert(&course).await.unwrap();
        course.id
    }

    #[tokio::test]
    async fn test_create_and_get_topic() {
        let db = Database::open_in_memory().await.unwrap();
        let course_id = seed_course(&db).await;
        let repo = TopicRepository::new(db.pool());

        let topic = repo
            .create(&NewTopic::new(&course_id, "Week 1", "admin").with_description("Setup"))
            .await
            .unwrap();

        assert_eq!(topic.course_id, course_id);
        assert_eq!(topic.name, "Week 1");
        assert_eq!(topic.description, "Setup");
        assert!(topic.is_active);

        let fetched = repo.get_by_id(&topic.id).await.unwrap().unwrap();
        assert_eq!(fetched, topic);
    }

    #[tokio::test]
    async fn test_create_topic_for_missing_course_fails() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = TopicRepository::new(db.pool());

        let result = repo.create(&NewTopic::new("no-such-course", "Week 1", "admin")).await;
        assert!(matches!(result, Err(LearnError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_missing_topic() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = TopicRepository::new(db.pool());

        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }
}
