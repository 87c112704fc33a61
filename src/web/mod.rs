//! Web API module for learnhub.
//!
//! This module exposes the course and material endpoints over HTTP, plus
//! health, OpenAPI docs and static serving of stored uploads.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::{create_app, create_router};
pub use server::WebServer;
