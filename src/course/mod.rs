//! Courses and their reference data (levels, categories).

mod category;
mod level;
mod repository;
mod types;

pub use category::{CourseCategory, CourseCategoryRepository};
pub use level::{CourseLevel, CourseLevelRepository};
pub use repository::CourseRepository;
pub use types::{Course, NewCourse};
