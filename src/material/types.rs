//! Material model for learnhub.

use validator::Validate;

use crate::validation::{display_name, uuid_text};
use crate::workflow::{AuditStamp, Draft, UploadPayload};

/// Material entity: one uploaded file under a topic.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Material {
    /// Unique material ID (UUID v4).
    pub id: String,
    /// Owning topic ID.
    pub topic_id: String,
    /// Material type ID.
    pub material_type_id: String,
    /// Material name, unique among active materials of the topic.
    pub name: String,
    /// Stored file name.
    pub file_path: String,
    /// Duration in minutes.
    pub duration: i64,
    /// Whether the material is active.
    pub is_active: bool,
    /// Whether the material is available to learners.
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

/// Request to create a new material.
#[derive(Debug, Clone, Validate)]
pub struct NewMaterial {
    /// Owning topic ID.
    #[validate(custom(function = "uuid_text"))]
    pub topic_id: String,
    /// Material type ID.
    #[validate(custom(function = "uuid_text"))]
    pub material_type_id: String,
    /// Material name.
    #[validate(
        length(min = 1, max = 200, message = "Name must be 1-200 characters"),
        custom(function = "display_name")
    )]
    pub name: String,
    /// Duration in minutes.
    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: i64,
    /// Creator.
    #[validate(
        length(min = 1, max = 100, message = "Creator must be 1-100 characters"),
        custom(function = "display_name")
    )]
    pub created_by: String,
    /// The material file.
    pub file: Option<UploadPayload>,
}

impl NewMaterial {
    /// Create a new material request.
    pub fn new(
        topic_id: impl Into<String>,
        material_type_id: impl Into<String>,
        name: impl Into<String>,
        created_by: impl Into<String>,
        file: UploadPayload,
    ) -> Self {
        Self {
            topic_id: topic_id.into(),
            material_type_id: material_type_id.into(),
            name: name.into(),
            duration: 0,
            created_by: created_by.into(),
            file: Some(file),
        }
    }

    /// Set the duration in minutes.
    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration = minutes;
        self
    }
}

impl Draft for NewMaterial {
    type Scope = String;
    type Entity = Material;

    const KIND: &'static str = "material";

    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> &String {
        &self.topic_id
    }

    fn actor(&self) -> &str {
        &self.created_by
    }

    fn upload(&self) -> Option<&UploadPayload> {
        self.file.as_ref()
    }

    fn requires_upload(&self) -> bool {
        true
    }

    fn into_entity(self, id: String, stored_file: Option<String>, stamp: &AuditStamp) -> Material {
        Material {
            id,
            topic_id: self.topic_id,
            material_type_id: self.material_type_id,
            name: self.name,
            file_path: stored_file.unwrap_or_default(),
            duration: self.duration,
            is_active: true,
            is_available: true,
            created_by: stamp.actor.clone(),
            created_at: stamp.at.clone(),
            modified_by: stamp.actor.clone(),
            modified_at: stamp.at.clone(),
        }
    }
}
