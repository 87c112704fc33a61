//! OpenAPI document for the Web API.

use utoipa::OpenApi;

use super::dto;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::course::create_course,
        handlers::course::get_course,
        handlers::course::list_courses,
        handlers::material::create_material,
        handlers::material::get_material_by_name,
        handlers::material::list_materials_by_type,
        handlers::reference::list_course_levels,
        handlers::reference::list_course_categories,
        handlers::reference::list_material_types,
        handlers::reference::get_material_type,
    ),
    components(schemas(
        dto::CreateCourseForm,
        dto::CreateMaterialForm,
        dto::CourseResponse,
        dto::CourseLevelResponse,
        dto::CourseCategoryResponse,
        dto::MaterialResponse,
        dto::MaterialTypeResponse,
    )),
    tags(
        (name = "courses", description = "Course creation and lookup"),
        (name = "materials", description = "Material upload and lookup"),
        (name = "reference", description = "Course levels, categories and material types"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_create_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/courses"));
        assert!(doc.paths.paths.contains_key("/api/materials"));
        assert!(doc
            .paths
            .paths
            .contains_key("/api/topics/{topic_id}/materials/types/{material_type_id}"));
    }
}
