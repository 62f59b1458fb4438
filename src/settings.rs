use crate::error::Result;
use crate::utils::constants::*;
use ::config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

/// Corner of the map an overlay is pinned to (Leaflet control positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Map view and marker style. Every field has a default, so an empty or
/// missing configuration file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MapSettings {
    pub title: String,

    /// Bounds apply to the initial view only; data points are never range-checked.
    #[validate(range(min = -90.0, max = 90.0))]
    pub center_lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub center_lng: f64,

    #[validate(range(max = 22))]
    pub zoom: u8,

    #[validate(length(min = 1))]
    pub tile_url: String,

    pub tile_attribution: String,

    #[validate(range(min = 0.0))]
    pub marker_radius: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub fill_opacity: f64,

    pub legend_position: OverlayPosition,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_MAP_TITLE.to_string(),
            center_lat: DEFAULT_CENTER_LAT,
            center_lng: DEFAULT_CENTER_LNG,
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            marker_radius: DEFAULT_MARKER_RADIUS_M,
            fill_opacity: DEFAULT_FILL_OPACITY,
            legend_position: OverlayPosition::default(),
        }
    }
}

impl MapSettings {
    /// Load settings from an optional file (format inferred from the
    /// extension), falling back to defaults for anything unset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("Loading map settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: MapSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Apply command-line overrides, then re-check the result.
    pub fn with_overrides(
        mut self,
        center_lat: Option<f64>,
        center_lng: Option<f64>,
        zoom: Option<u8>,
    ) -> Result<Self> {
        if let Some(lat) = center_lat {
            self.center_lat = lat;
        }
        if let Some(lng) = center_lng {
            self.center_lng = lng;
        }
        if let Some(zoom) = zoom {
            self.zoom = zoom;
        }
        self.validate()?;
        Ok(self)
    }
}
