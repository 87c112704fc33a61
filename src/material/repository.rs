//! Material repository for learnhub.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::material_type::MaterialTypeRepository;
use super::topic::TopicRepository;
use super::types::{Material, NewMaterial};
use crate::workflow::StorageGateway;
use crate::{LearnError, Result};

const MATERIAL_COLUMNS: &str = "id, topic_id, material_type_id, name, file_path, duration,
     is_active, is_available, created_by, created_at, modified_by, modified_at";

/// Repository for material persistence.
pub struct MaterialRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MaterialRepository<'a> {
    /// Create a new MaterialRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a material by ID, active or not.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Material>> {
        sqlx::query_as::<_, Material>(&format!(
            "SELECT {MATERIAL_COLUMNS} FROM materials WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))
    }

    /// Count materials in a topic, active or not.
    pub async fn count_by_topic(&self, topic_id: &str) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM materials WHERE topic_id = ?")
            .bind(topic_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }
}

#[async_trait]
impl<'a> StorageGateway for MaterialRepository<'a> {
    type Request = NewMaterial;
    type Entity = Material;
    type Scope = String;
    type Kind = String;

    async fn resolve_references(&self, draft: &NewMaterial) -> Result<()> {
        if TopicRepository::new(self.pool)
            .get_by_id(&draft.topic_id)
            .await?
            .is_none()
        {
            return Err(LearnError::NotFound("topic".to_string()));
        }

        if MaterialTypeRepository::new(self.pool)
            .get_by_id(&draft.material_type_id)
            .await?
            .is_none()
        {
            return Err(LearnError::NotFound("material type".to_string()));
        }

        Ok(())
    }

    async fn insert(&self, material: &Material) -> Result<()> {
        sqlx::query(
            "INSERT INTO materials (id, topic_id, material_type_id, name, file_path, duration,
                                    is_active, is_available, created_by, created_at, modified_by, modified_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&material.id)
        .bind(&material.topic_id)
        .bind(&material.material_type_id)
        .bind(&material.name)
        .bind(&material.file_path)
        .bind(material.duration)
        .bind(material.is_active)
        .bind(material.is_available)
        .bind(&material.created_by)
        .bind(&material.created_at)
        .bind(&material.modified_by)
        .bind(&material.modified_at)
        .execute(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_name_and_scope(
        &self,
        name: &str,
        topic_id: &String,
    ) -> Result<Option<Material>> {
        sqlx::query_as::<_, Material>(&format!(
            "SELECT {MATERIAL_COLUMNS} FROM materials
             WHERE topic_id = ? AND name = ? AND is_active = 1"
        ))
        .bind(topic_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))
    }

    async fn exists_by_name_and_scope(&self, name: &str, topic_id: &String) -> Result<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                 SELECT 1 FROM materials WHERE topic_id = ? AND name = ? AND is_active = 1
             )",
        )
        .bind(topic_id)
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))
    }

    async fn list_by_scope_and_kind(
        &self,
        topic_id: &String,
        material_type_id: &String,
    ) -> Result<Vec<Material>> {
        sqlx::query_as::<_, Material>(&format!(
            "SELECT {MATERIAL_COLUMNS} FROM materials
             WHERE topic_id = ? AND material_type_id = ? AND is_active = 1
             ORDER BY created_at, name"
        ))
        .bind(topic_id)
        .bind(material_type_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| LearnError::Database(e.to_string()))
    }
}
