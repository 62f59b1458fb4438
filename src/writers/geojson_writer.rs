use crate::error::Result;
use crate::settings::MapSettings;
use crate::writers::map_surface::{CircleMarker, MapSurface, MapView, Overlay};
use crate::writers::MapDocument;
use serde_json::{json, Value};
use tracing::warn;

/// GeoJSON `FeatureCollection` with one point feature per marker. Marker
/// style goes in `properties`; the view and legend are kept as foreign
/// members so the file can be re-styled by any GeoJSON viewer.
pub struct GeoJsonDocument {
    view: MapView,
    markers: Vec<CircleMarker>,
    overlays: Vec<Overlay>,
}

impl GeoJsonDocument {
    pub fn new(settings: &MapSettings) -> Self {
        Self {
            view: MapView::from_settings(settings),
            markers: Vec::new(),
            overlays: Vec::new(),
        }
    }

    pub fn to_value(&self) -> Value {
        let features: Vec<Value> = self.markers.iter().map(feature).collect();
        let legend: Vec<Value> = self
            .overlays
            .iter()
            .map(|o| json!({ "position": o.position, "markup": o.markup }))
            .collect();

        json!({
            "type": "FeatureCollection",
            "view": {
                "center": [self.view.center.lng, self.view.center.lat],
                "zoom": self.view.zoom,
            },
            "legend": legend,
            "features": features,
        })
    }
}

fn feature(marker: &CircleMarker) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            // GeoJSON positions are [longitude, latitude]
            "coordinates": [marker.center.lng, marker.center.lat],
        },
        "properties": {
            "value": marker.value,
            "radius": marker.radius,
            "fill": marker.fill_color.to_hex(),
            "stroke": marker.stroke_color.to_hex(),
            "fill-opacity": marker.fill_opacity,
            "tooltip": marker.tooltip,
        },
    })
}

impl MapSurface for GeoJsonDocument {
    fn initialize(&mut self, view: MapView) {
        self.view = view;
    }

    fn add_circle(&mut self, marker: CircleMarker) {
        // RFC 7946 positions must be finite numbers
        if !marker.has_finite_center() {
            warn!(
                "Skipping marker with non-finite center ({}, {})",
                marker.center.lat, marker.center.lng
            );
            return;
        }
        self.markers.push(marker);
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }
}

impl MapDocument for GeoJsonDocument {
    fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;
    use crate::writers::legend_builder::LegendBuilder;
    use crate::writers::map_surface::LatLng;

    #[test]
    fn test_feature_collection() -> Result<()> {
        let mut document = GeoJsonDocument::new(&MapSettings::default());
        LegendBuilder::new().attach(&mut document);
        document.add_circle(CircleMarker {
            center: LatLng::new(3.0, 101.0),
            radius: 100.0,
            fill_color: Rgb::new(255, 0, 0),
            stroke_color: Rgb::new(255, 0, 0),
            fill_opacity: 0.7,
            tooltip: "Lat: 3\nLng: 101\nValue: 12".to_string(),
            value: Some(12.0),
        });

        let value: Value = serde_json::from_str(&document.render()?)?;

        assert_eq!(value["type"], "FeatureCollection");
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["geometry"]["coordinates"], json!([101.0, 3.0]));
        assert_eq!(features[0]["properties"]["fill"], "#ff0000");
        assert_eq!(features[0]["properties"]["value"], 12.0);
        assert_eq!(value["legend"].as_array().unwrap().len(), 1);
        assert_eq!(value["legend"][0]["position"], "bottomright");
        assert_eq!(value["view"]["zoom"], 10);
        Ok(())
    }

    #[test]
    fn test_missing_value_is_null() {
        let mut document = GeoJsonDocument::new(&MapSettings::default());
        document.add_circle(CircleMarker {
            center: LatLng::new(0.0, 0.0),
            radius: 100.0,
            fill_color: Rgb::new(128, 128, 128),
            stroke_color: Rgb::new(128, 128, 128),
            fill_opacity: 0.7,
            tooltip: String::new(),
            value: None,
        });

        let value = document.to_value();
        assert!(value["features"][0]["properties"]["value"].is_null());
    }

    #[test]
    fn test_non_finite_center_is_skipped() -> Result<()> {
        let mut document = GeoJsonDocument::new(&MapSettings::default());
        document.add_circle(CircleMarker {
            center: LatLng::new(f64::INFINITY, 101.0),
            radius: 100.0,
            fill_color: Rgb::new(255, 0, 0),
            stroke_color: Rgb::new(255, 0, 0),
            fill_opacity: 0.7,
            tooltip: "Lat: inf\nLng: 101\nValue: 12".to_string(),
            value: Some(12.0),
        });

        let rendered = document.render()?;
        let value: Value = serde_json::from_str(&rendered)?;

        assert!(value["features"].as_array().unwrap().is_empty());
        assert!(!rendered.contains("null"));
        Ok(())
    }
}
