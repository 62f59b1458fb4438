pub mod point_reader;
pub mod source;

pub use point_reader::{PointIterator, PointReader};
pub use source::{source_from_spec, DataSource, FileSource, HttpSource, StaticSource};
