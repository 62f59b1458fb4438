use crate::models::{PointRecord, ValidPoint, ValidationOutcome};

/// A record is renderable when both coordinates parsed. Coordinates are not
/// range-checked: a latitude of 999 passes.
pub fn is_valid(record: &PointRecord) -> bool {
    record.latitude.is_some() && record.longitude.is_some()
}

pub fn classify(record: &PointRecord) -> ValidationOutcome {
    match (record.latitude, record.longitude) {
        (Some(latitude), Some(longitude)) => {
            ValidationOutcome::Valid(ValidPoint::new(latitude, longitude, record.value))
        }
        _ => ValidationOutcome::Invalid,
    }
}
