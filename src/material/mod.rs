//! Course materials, the topics that scope them, and material types.

mod material_type;
mod repository;
mod topic;
mod types;

pub use material_type::{
    MaterialType, MaterialTypeRepository, AUDIO_TYPE_ID, PDF_TYPE_ID, PPT_TYPE_ID, TEXT_TYPE_ID,
    VIDEO_TYPE_ID,
};
pub use repository::MaterialRepository;
pub use topic::{NewTopic, Topic, TopicRepository};
pub use types::{Material, NewMaterial};
