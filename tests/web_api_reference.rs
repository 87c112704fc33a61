//! Web API Reference Data Tests
//!
//! Integration tests for course levels, categories, material types, and the
//! service endpoints (health, OpenAPI document).

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{spawn_app, TECHNICAL_CATEGORY};
use learnhub::material::{PPT_TYPE_ID, VIDEO_TYPE_ID};

#[tokio::test]
async fn test_list_course_levels() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/api/course-levels")
        .add_query_param("accessed_by", "admin")
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    let levels = json["data"].as_array().unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0]["level_id"], 1);
    assert_eq!(levels[0]["name"], "Beginner");
    assert_eq!(levels[2]["name"], "Advanced");
}

#[tokio::test]
async fn test_list_course_levels_anonymous() {
    let app = spawn_app().await;

    let response = app.server.get("/api/course-levels").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_list_course_categories() {
    let app = spawn_app().await;

    let response = app.server.get("/api/course-categories").await;

    response.assert_status_ok();
    let json: Value = response.json();
    let categories = json["data"].as_array().unwrap();
    assert_eq!(categories.len(), 3);
    assert!(categories
        .iter()
        .any(|c| c["category_id"] == TECHNICAL_CATEGORY && c["name"] == "Technical"));
}

#[tokio::test]
async fn test_list_material_types() {
    let app = spawn_app().await;

    let response = app.server.get("/api/material-types").await;

    response.assert_status_ok();
    let json: Value = response.json();
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 5);
    for expected in ["Video", "Audio", "Text", "PDF", "PPT"] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[tokio::test]
async fn test_get_material_type() {
    let app = spawn_app().await;

    let response = app
        .server
        .get(&format!("/api/material-types/{VIDEO_TYPE_ID}"))
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["data"]["material_type_id"], VIDEO_TYPE_ID);
    assert_eq!(json["data"]["name"], "Video");

    let response = app
        .server
        .get(&format!("/api/material-types/{PPT_TYPE_ID}"))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_get_material_type_nil_uuid() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/api/material-types/00000000-0000-0000-0000-000000000000")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let response = app.server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_openapi_document() {
    let app = spawn_app().await;

    let response = app.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let json: Value = response.json();
    let paths = json["paths"].as_object().unwrap();
    assert!(paths.contains_key("/api/courses"));
    assert!(paths.contains_key("/api/materials"));
    assert!(paths.contains_key("/api/material-types/{id}"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = spawn_app().await;

    let response = app.server.get("/api/nothing-here").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
