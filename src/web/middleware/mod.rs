//! Middleware for Web API.

mod cors;

pub use cors::create_cors_layer;
