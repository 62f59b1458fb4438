use crate::models::Rgb;
use crate::settings::{MapSettings, OverlayPosition};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Initial center and zoom of the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl MapView {
    pub fn from_settings(settings: &MapSettings) -> Self {
        Self {
            center: LatLng::new(settings.center_lat, settings.center_lng),
            zoom: settings.zoom,
        }
    }
}

/// A filled circle with a hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    pub center: LatLng,
    /// Meters
    pub radius: f64,
    pub fill_color: Rgb,
    pub stroke_color: Rgb,
    pub fill_opacity: f64,
    /// Plain text, lines separated by `\n`
    pub tooltip: String,
    pub value: Option<f64>,
}

impl CircleMarker {
    pub fn has_finite_center(&self) -> bool {
        self.center.lat.is_finite() && self.center.lng.is_finite()
    }
}

/// Static markup pinned to a corner of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub position: OverlayPosition,
    pub markup: String,
}

/// Anything markers and overlays can be drawn onto.
pub trait MapSurface {
    fn initialize(&mut self, view: MapView);

    fn add_circle(&mut self, marker: CircleMarker);

    fn add_overlay(&mut self, overlay: Overlay);
}

/// Surface that only records what was drawn. Used for dry runs.
#[derive(Debug, Default)]
pub struct MemorySurface {
    pub view: Option<MapView>,
    pub markers: Vec<CircleMarker>,
    pub overlays: Vec<Overlay>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for MemorySurface {
    fn initialize(&mut self, view: MapView) {
        self.view = Some(view);
    }

    fn add_circle(&mut self, marker: CircleMarker) {
        self.markers.push(marker);
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }
}
