//! Test helpers for Web API integration tests.
//!
//! Builds the full application over an in-memory database and a temporary
//! upload directory, plus helpers for the multipart create forms.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::Value;
use tempfile::TempDir;

use learnhub::file::FileStorage;
use learnhub::material::{NewTopic, TopicRepository};
use learnhub::web::{create_app, AppState};
use learnhub::Database;

/// Seeded "Technical" course category.
pub const TECHNICAL_CATEGORY: &str = "6f1c2a0e-0b1d-4c39-9a57-1f3e6d2b8c01";

/// A running test application.
pub struct TestApp {
    /// HTTP test server.
    pub server: TestServer,
    /// Shared database.
    pub db: Arc<Database>,
    /// Upload storage.
    pub storage: FileStorage,
    /// Keeps the upload directory alive for the test's duration.
    _temp: TempDir,
}

/// Create a test application with default upload limits.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|state| state).await
}

/// Create a test application, letting the caller adjust the state.
pub async fn spawn_app_with(adjust: impl FnOnce(AppState) -> AppState) -> TestApp {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let db = Arc::new(db);

    let temp = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::new(temp.path()).expect("Failed to create storage");

    let state = adjust(AppState::new(db.clone(), storage.clone()));
    let router = create_app(Arc::new(state), &[]);
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        db,
        storage,
        _temp: temp,
    }
}

/// Multipart form for a course with the required fields filled in.
pub fn course_form(title: &str, level_id: i64) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title)
        .add_text("level_id", level_id.to_string())
        .add_text("category_id", TECHNICAL_CATEGORY)
        .add_text("description", "A course")
        .add_text("duration", "10")
        .add_text("created_by", "admin")
}

/// Multipart form for a material with a text file attached.
pub fn material_form(
    topic_id: &str,
    material_type_id: &str,
    name: &str,
    content: &[u8],
) -> MultipartForm {
    MultipartForm::new()
        .add_text("topic_id", topic_id)
        .add_text("material_type_id", material_type_id)
        .add_text("name", name)
        .add_text("duration", "15")
        .add_text("created_by", "admin")
        .add_part(
            "material",
            Part::bytes(content.to_vec())
                .file_name("test.txt")
                .mime_type("text/plain"),
        )
}

/// Create a course through the API and return its `data` object.
pub async fn create_course(app: &TestApp, title: &str) -> Value {
    let response = app
        .server
        .post("/api/courses")
        .multipart(course_form(title, 1))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["data"].clone()
}

/// Create a course and a topic under it; return the topic ID.
pub async fn create_topic(app: &TestApp) -> String {
    let course = create_course(app, "Intro to Go").await;
    let course_id = course["id"].as_str().expect("course id").to_string();

    TopicRepository::new(app.db.pool())
        .create(&NewTopic::new(course_id, "Week 1", "admin"))
        .await
        .expect("Failed to create topic")
        .id
}
