pub mod color_mapper;
pub mod coordinate_validator;
pub mod pipeline;

pub use color_mapper::{color_for, color_for_record_value};
pub use coordinate_validator::{classify, is_valid};
pub use pipeline::{Pipeline, PipelineReport};
