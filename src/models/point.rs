use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed data row. A field that could not be parsed as a number is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub value: Option<f64>,
}

impl PointRecord {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>, value: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            value,
        }
    }

    /// Build a record from three numbers, treating NaN as missing.
    pub fn from_values(latitude: f64, longitude: f64, value: f64) -> Self {
        Self::new(defined(latitude), defined(longitude), defined(value))
    }
}

/// A record whose coordinates are both defined. Only the coordinate
/// validator hands these out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub value: Option<f64>,
}

impl ValidPoint {
    pub(crate) fn new(latitude: f64, longitude: f64, value: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            value,
        }
    }

    /// Tooltip text: one `Label: value` pair per line.
    pub fn tooltip_text(&self) -> String {
        format!(
            "Lat: {}\nLng: {}\nValue: {}",
            self.latitude,
            self.longitude,
            format_field(self.value)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationOutcome {
    Valid(ValidPoint),
    Invalid,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

/// A data row skipped because its coordinates are undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rejection {
    /// 1-based, counting data rows only (the header is not a row).
    pub row: usize,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Rejection {
    pub fn new(row: usize, record: &PointRecord) -> Self {
        Self {
            row,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates at row {}: ({}, {})",
            self.row,
            format_field(self.latitude),
            format_field(self.longitude)
        )
    }
}

/// Render an optional numeric field, printing `NaN` for a missing one.
pub fn format_field(field: Option<f64>) -> String {
    match field {
        Some(v) => v.to_string(),
        None => "NaN".to_string(),
    }
}

fn defined(v: f64) -> Option<f64> {
    if v.is_nan() {
        None
    } else {
        Some(v)
    }
}
