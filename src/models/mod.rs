pub mod color;
pub mod legend;
pub mod point;

pub use color::Rgb;
pub use legend::ColorBand;
pub use point::{format_field, PointRecord, Rejection, ValidPoint, ValidationOutcome};
