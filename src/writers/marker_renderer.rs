use crate::models::ValidPoint;
use crate::processors::color_mapper::color_for_record_value;
use crate::settings::MapSettings;
use crate::utils::constants::{DEFAULT_FILL_OPACITY, DEFAULT_MARKER_RADIUS_M};
use crate::writers::map_surface::{CircleMarker, LatLng, MapSurface};

pub struct MarkerRenderer {
    radius: f64,
    fill_opacity: f64,
}

impl MarkerRenderer {
    pub fn new() -> Self {
        Self {
            radius: DEFAULT_MARKER_RADIUS_M,
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }

    pub fn from_settings(settings: &MapSettings) -> Self {
        Self {
            radius: settings.marker_radius,
            fill_opacity: settings.fill_opacity,
        }
    }

    /// Build the marker for a point without drawing it.
    pub fn marker_for(&self, point: &ValidPoint) -> CircleMarker {
        let color = color_for_record_value(point.value);

        CircleMarker {
            center: LatLng::new(point.latitude, point.longitude),
            radius: self.radius,
            fill_color: color,
            stroke_color: color,
            fill_opacity: self.fill_opacity,
            tooltip: point.tooltip_text(),
            value: point.value,
        }
    }

    /// Draw one marker for a validated point.
    pub fn render<M: MapSurface + ?Sized>(&self, surface: &mut M, point: &ValidPoint) {
        surface.add_circle(self.marker_for(point));
    }
}

impl Default for MarkerRenderer {
    fn default() -> Self {
        Self::new()
    }
}
