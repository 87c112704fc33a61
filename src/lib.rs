//! learnhub - learning management backend.
//!
//! Courses and course materials are created through one duplicate-checked
//! workflow (see [`workflow`]): validate, check the name is free within its
//! scope, write the uploaded file, then insert the row.

pub mod config;
pub mod course;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod material;
pub mod validation;
pub mod web;
pub mod workflow;

pub use config::Config;
pub use course::{Course, CourseRepository, NewCourse};
pub use db::Database;
pub use error::{LearnError, Result};
pub use material::{Material, MaterialRepository, NewMaterial};
pub use workflow::{CreateError, CreateWorkflow};
