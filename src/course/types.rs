//! Course model for learnhub.

use validator::Validate;

use crate::validation::{display_name, no_control_chars};
use crate::workflow::{AuditStamp, Draft, UploadPayload};

/// Course entity.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Course {
    /// Unique course ID (UUID v4).
    pub id: String,
    /// Course title, unique among active courses.
    pub title: String,
    /// Course level ID.
    pub level_id: i64,
    /// Course category ID.
    pub category_id: String,
    /// Course description.
    pub description: String,
    /// Duration in hours.
    pub duration: i64,
    /// Stored thumbnail file name.
    pub thumbnail: Option<String>,
    /// Whether the course is active.
    pub is_active: bool,
    /// Whether the course is available to learners.
    pub is_available: bool,
    /// Creator.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last modifier.
    pub modified_by: String,
    /// Last modification timestamp.
    pub modified_at: String,
}

/// Request to create a new course.
#[derive(Debug, Clone, Validate)]
pub struct NewCourse {
    /// Course title.
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "display_name")
    )]
    pub title: String,
    /// Course level ID.
    #[validate(range(min = 1, message = "Level is required"))]
    pub level_id: i64,
    /// Course category ID.
    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,
    /// Course description.
    #[validate(
        length(max = 4000, message = "Description is too long"),
        custom(function = "no_control_chars")
    )]
    pub description: String,
    /// Duration in hours.
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: i64,
    /// Creator.
    #[validate(
        length(min = 1, max = 100, message = "Creator must be 1-100 characters"),
        custom(function = "display_name")
    )]
    pub created_by: String,
    /// Optional thumbnail image.
    pub thumbnail: Option<UploadPayload>,
}

impl NewCourse {
    /// Create a new course request with minimal required fields.
    pub fn new(
        title: impl Into<String>,
        level_id: i64,
        category_id: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            level_id,
            category_id: category_id.into(),
            description: String::new(),
            duration: 0,
            created_by: created_by.into(),
            thumbnail: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the duration in hours.
    pub fn with_duration(mut self, hours: i64) -> Self {
        self.duration = hours;
        self
    }

    /// Attach a thumbnail image.
    pub fn with_thumbnail(mut self, thumbnail: UploadPayload) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }
}

impl Draft for NewCourse {
    type Scope = ();
    type Entity = Course;

    const KIND: &'static str = "course";

    fn name(&self) -> &str {
        &self.title
    }

    fn scope(&self) -> &() {
        &()
    }

    fn actor(&self) -> &str {
        &self.created_by
    }

    fn upload(&self) -> Option<&UploadPayload> {
        self.thumbnail.as_ref()
    }

    fn into_entity(self, id: String, stored_file: Option<String>, stamp: &AuditStamp) -> Course {
        Course {
            id,
            title: self.title,
            level_id: self.level_id,
            category_id: self.category_id,
            description: self.description,
            duration: self.duration,
            thumbnail: stored_file,
            is_active: true,
            is_available: true,
            created_by: stamp.actor.clone(),
            created_at: stamp.at.clone(),
            modified_by: stamp.actor.clone(),
            modified_at: stamp.at.clone(),
        }
    }
}
