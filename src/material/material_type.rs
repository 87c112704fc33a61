//! Material types.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{LearnError, Result};

/// Seeded ID of the Video material type.
pub const VIDEO_TYPE_ID: &str = "9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a01";
/// Seeded ID of the Audio material type.
pub const AUDIO_TYPE_ID: &str = "9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a02";
/// Seeded ID of the Text material type.
pub const TEXT_TYPE_ID: &str = "9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a03";
/// Seeded ID of the PDF material type.
pub const PDF_TYPE_ID: &str = "9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a04";
/// Seeded ID of the PPT material type.
pub const PPT_TYPE_ID: &str = "9b2d7e4a-3f5c-4e8b-a1d6-0c7f2e9b4a05";

/// Material type reference row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MaterialType {
    /// Type ID (UUID).
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Read-only repository for material types.
pub struct MaterialTypeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MaterialTypeRepository<'a> {
    /// Create a new MaterialTypeRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all material types ordered by name.
    pub async fn list_all(&self) -> Result<Vec<MaterialType>> {
        sqlx::query_as::<_, MaterialType>("SELECT id, name FROM material_types ORDER BY name")
            .fetch_all(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }

    /// Get a material type by ID.
    ///
    /// The nil UUID never matches.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<MaterialType>> {
        if Uuid::try_parse(id).is_ok_and(|u| u.is_nil()) {
            return Ok(None);
        }

        sqlx::query_as::<_, MaterialType>("SELECT id, name FROM material_types WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| LearnError::Database(e.to_string()))
    }
}
