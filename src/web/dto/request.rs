//! Request DTOs for Web API.
//!
//! Create endpoints take `multipart/form-data`; the forms here collect the
//! text fields and the uploaded file and turn them into workflow requests.

use std::collections::HashMap;

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::course::NewCourse;
use crate::material::NewMaterial;
use crate::web::error::ApiError;
use crate::workflow::UploadPayload;

// ============================================================================
// Multipart helpers
// ============================================================================

/// Text fields and files read from a multipart body.
#[derive(Debug, Default)]
struct FormFields {
    text: HashMap<String, String>,
    files: HashMap<String, UploadPayload>,
}

impl FormFields {
    /// Read every field of a multipart body.
    ///
    /// Fields named in `file_fields` are read as uploads and must not exceed
    /// `max_file_size` bytes; everything else is read as text.
    async fn read(
        mut multipart: Multipart,
        file_fields: &[&str],
        max_file_size: usize,
    ) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or("").to_string();

            if file_fields.contains(&name.as_str()) {
                let payload = read_file(field, &name, max_file_size).await?;
                form.files.insert(name, payload);
            } else if !name.is_empty() {
                let value = field.text().await.map_err(multipart_error)?;
                form.text.insert(name, value);
            }
        }

        Ok(form)
    }

    fn required(&mut self, name: &str) -> Result<String, ApiError> {
        self.text
            .remove(name)
            .ok_or_else(|| ApiError::invalid_field(name, "This field is required"))
    }

    fn optional(&mut self, name: &str) -> Option<String> {
        self.text.remove(name)
    }

    fn required_i64(&mut self, name: &str) -> Result<i64, ApiError> {
        let raw = self.required(name)?;
        parse_i64(name, &raw)
    }

    fn optional_i64(&mut self, name: &str) -> Result<Option<i64>, ApiError> {
        match self.optional(name) {
            Some(raw) if !raw.trim().is_empty() => parse_i64(name, &raw).map(Some),
            _ => Ok(None),
        }
    }

    fn file(&mut self, name: &str) -> Option<UploadPayload> {
        self.files.remove(name)
    }
}

fn parse_i64(name: &str, raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::invalid_field(name, "Must be an integer"))
}

async fn read_file(
    field: Field<'_>,
    name: &str,
    max_file_size: usize,
) -> Result<UploadPayload, ApiError> {
    let filename = field.file_name().unwrap_or("").to_string();
    let bytes = field.bytes().await.map_err(multipart_error)?;

    if bytes.len() > max_file_size {
        let max_mb = max_file_size / 1024 / 1024;
        return Err(ApiError::invalid_field(
            name,
            format!("File too large (max {max_mb}MB)"),
        ));
    }

    Ok(UploadPayload::new(bytes.to_vec(), filename))
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::payload_too_large("Request body too large");
    }
    tracing::debug!("Failed to read multipart field: {}", e);
    ApiError::bad_request("Invalid multipart data")
}

// ============================================================================
// Course Requests
// ============================================================================

/// Multipart form for creating a course.
#[derive(Debug, ToSchema)]
pub struct CreateCourseForm {
    /// Course title.
    pub title: String,
    /// Course level ID.
    pub level_id: i64,
    /// Course category ID.
    pub category_id: String,
    /// Course description.
    pub description: Option<String>,
    /// Duration in hours.
    pub duration: Option<i64>,
    /// Creator.
    pub created_by: String,
    /// Thumbnail image.
    #[schema(value_type = Option<String>, format = Binary)]
    pub thumbnail: Option<UploadPayload>,
}

impl CreateCourseForm {
    /// Multipart field carrying the thumbnail.
    pub const FILE_FIELD: &'static str = "thumbnail";

    /// Read the form from a multipart body.
    pub async fn from_multipart(
        multipart: Multipart,
        max_file_size: usize,
    ) -> Result<Self, ApiError> {
        let mut fields = FormFields::read(multipart, &[Self::FILE_FIELD], max_file_size).await?;

        Ok(Self {
            title: fields.required("title")?,
            level_id: fields.required_i64("level_id")?,
            category_id: fields.required("category_id")?,
            description: fields.optional("description"),
            duration: fields.optional_i64("duration")?,
            created_by: fields.required("created_by")?,
            // Browsers send an empty unnamed part when no file was chosen
            thumbnail: fields
                .file(Self::FILE_FIELD)
                .filter(|t| !(t.original_filename.is_empty() && t.is_empty())),
        })
    }

    /// Convert into a workflow request.
    pub fn into_new_course(self) -> NewCourse {
        let mut course =
            NewCourse::new(self.title, self.level_id, self.category_id, self.created_by);
        if let Some(description) = self.description {
            course = course.with_description(description);
        }
        if let Some(hours) = self.duration {
            course = course.with_duration(hours);
        }
        if let Some(thumbnail) = self.thumbnail {
            course = course.with_thumbnail(thumbnail);
        }
        course
    }
}

/// Query parameters for listing courses.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseListQuery {
    /// Course level ID.
    pub level_id: i64,
}

/// Query parameters for listing course levels.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseLevelQuery {
    /// Who is asking; recorded in the log.
    pub accessed_by: Option<String>,
}

// ============================================================================
// Material Requests
// ============================================================================

/// Multipart form for creating a material.
#[derive(Debug, ToSchema)]
pub struct CreateMaterialForm {
    /// Topic ID.
    pub topic_id: String,
    /// Material type ID.
    pub material_type_id: String,
    /// Material name.
    pub name: String,
    /// Duration in minutes.
    pub duration: Option<i64>,
    /// Creator.
    pub created_by: String,
    /// The material file.
    #[schema(value_type = String, format = Binary)]
    pub material: Option<UploadPayload>,
}

impl CreateMaterialForm {
    /// Multipart field carrying the material file.
    pub const FILE_FIELD: &'static str = "material";

    /// Read the form from a multipart body.
    pub async fn from_multipart(
        multipart: Multipart,
        max_file_size: usize,
    ) -> Result<Self, ApiError> {
        let mut fields = FormFields::read(multipart, &[Self::FILE_FIELD], max_file_size).await?;

        Ok(Self {
            topic_id: fields.required("topic_id")?,
            material_type_id: fields.required("material_type_id")?,
            name: fields.required("name")?,
            duration: fields.optional_i64("duration")?,
            created_by: fields.required("created_by")?,
            material: fields.file(Self::FILE_FIELD),
        })
    }

    /// Convert into a workflow request.
    ///
    /// A missing file is left for the workflow to reject.
    pub fn into_new_material(self) -> NewMaterial {
        NewMaterial {
            topic_id: self.topic_id,
            material_type_id: self.material_type_id,
            name: self.name,
            duration: self.duration.unwrap_or(0),
            created_by: self.created_by,
            file: self.material,
        }
    }
}

/// Query parameters for looking up a material by name.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MaterialNameQuery {
    /// Exact material name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64("level_id", " 2 ").unwrap(), 2);
        assert!(parse_i64("level_id", "two").is_err());
    }

    #[test]
    fn test_form_fields_required_and_optional() {
        let mut fields = FormFields::default();
        fields.text.insert("title".to_string(), "Intro to Go".to_string());
        fields.text.insert("duration".to_string(), "".to_string());

        assert_eq!(fields.required("title").unwrap(), "Intro to Go");
        assert!(fields.required("title").is_err());
        assert_eq!(fields.optional_i64("duration").unwrap(), None);
        assert_eq!(fields.optional("description"), None);
    }

    #[test]
    fn test_course_form_into_new_course() {
        let form = CreateCourseForm {
            title: "Intro to Go".to_string(),
            level_id: 1,
            category_id: "cat".to_string(),
            description: Some("Basics".to_string()),
            duration: Some(10),
            created_by: "admin".to_string(),
            thumbnail: None,
        };

        let course = form.into_new_course();
        assert_eq!(course.title, "Intro to Go");
        assert_eq!(course.description, "Basics");
        assert_eq!(course.duration, 10);
        assert!(course.thumbnail.is_none());
    }

    #[test]
    fn test_material_form_keeps_missing_file() {
        let form = CreateMaterialForm {
            topic_id: "t".to_string(),
            material_type_id: "m".to_string(),
            name: "Syllabus".to_string(),
            duration: None,
            created_by: "admin".to_string(),
            material: None,
        };

        let material = form.into_new_material();
        assert!(material.file.is_none());
        assert_eq!(material.duration, 0);
    }
}
