use crate::error::Result;
use crate::models::Rgb;
use crate::settings::{MapSettings, OverlayPosition};
use crate::utils::constants::LEAFLET_VERSION;
use crate::writers::map_surface::{CircleMarker, MapSurface, MapView, Overlay};
use crate::writers::MapDocument;
use minijinja::{context, Environment};
use serde::Serialize;
use tracing::warn;

// The `.html` name turns on HTML auto-escaping
static MAP_TEMPLATE_NAME: &str = "map.html";
static MAP_TEMPLATE: &str = include_str!("./map.html.jinja");

#[derive(Serialize)]
struct TileLayer<'a> {
    url: &'a str,
    attribution: &'a str,
}

/// Marker in the shape Leaflet's `L.circle` options expect.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeafletCircle<'a> {
    lat: f64,
    lng: f64,
    radius: f64,
    color: &'a Rgb,
    fill_color: &'a Rgb,
    fill_opacity: f64,
    tooltip: &'a str,
}

#[derive(Serialize)]
struct LeafletControl<'a> {
    position: OverlayPosition,
    markup: &'a str,
}

/// A standalone HTML page that draws the map with Leaflet.
pub struct LeafletDocument {
    title: String,
    tile_url: String,
    tile_attribution: String,
    view: MapView,
    markers: Vec<CircleMarker>,
    overlays: Vec<Overlay>,
}

impl LeafletDocument {
    pub fn new(settings: &MapSettings) -> Self {
        Self {
            title: settings.title.clone(),
            tile_url: settings.tile_url.clone(),
            tile_attribution: settings.tile_attribution.clone(),
            view: MapView::from_settings(settings),
            markers: Vec::new(),
            overlays: Vec::new(),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn render_html(&self) -> Result<String> {
        let mut env = Environment::new();
        env.add_template(MAP_TEMPLATE_NAME, MAP_TEMPLATE)?;

        let markers: Vec<LeafletCircle> = self
            .markers
            .iter()
            .map(|m| LeafletCircle {
                lat: m.center.lat,
                lng: m.center.lng,
                radius: m.radius,
                color: &m.stroke_color,
                fill_color: &m.fill_color,
                fill_opacity: m.fill_opacity,
                tooltip: &m.tooltip,
            })
            .collect();

        let overlays: Vec<LeafletControl> = self
            .overlays
            .iter()
            .map(|o| LeafletControl {
                position: o.position,
                markup: &o.markup,
            })
            .collect();

        let tiles = TileLayer {
            url: &self.tile_url,
            attribution: &self.tile_attribution,
        };

        let html = env.get_template(MAP_TEMPLATE_NAME)?.render(context! {
            title => &self.title,
            leaflet_version => LEAFLET_VERSION,
            view => &self.view,
            tiles => &tiles,
            overlays => &overlays,
            markers => &markers,
        })?;

        Ok(html)
    }
}

impl MapSurface for LeafletDocument {
    fn initialize(&mut self, view: MapView) {
        self.view = view;
    }

    fn add_circle(&mut self, marker: CircleMarker) {
        // JSON has no encoding for infinite coordinates
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

impl MapDocument for LeafletDocument {
    fn render(&self) -> Result<String> {
        self.render_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::legend_builder::LegendBuilder;
    use crate::writers::map_surface::LatLng;

    fn marker(lat: f64, lng: f64, color: Rgb) -> CircleMarker {
        CircleMarker {
            center: LatLng::new(lat, lng),
            radius: 100.0,
            fill_color: color,
            stroke_color: color,
            fill_opacity: 0.7,
            tooltip: format!("Lat: {}\nLng: {}\nValue: 5", lat, lng),
            value: Some(5.0),
        }
    }

    #[test]
    fn test_render_contains_view_markers_and_legend() -> Result<()> {
        let settings = MapSettings::default();
        let mut document = LeafletDocument::new(&settings);

        document.initialize(MapView::from_settings(&settings));
        LegendBuilder::from_settings(&settings).attach(&mut document);
        document.add_circle(marker(3.0, 101.0, Rgb::new(128, 128, 0)));
        document.add_circle(marker(3.1, 101.1, Rgb::new(255, 0, 0)));

        let html = document.render_html()?;

        assert_eq!(document.marker_count(), 2);
        assert!(html.contains("<title>Point Map</title>"));
        assert!(html.contains("leaflet@1.9.4"));
        assert!(html.contains("\"zoom\":10"));
        assert!(html.contains("\"fillColor\":\"rgb(128,128,0)\""));
        assert!(html.contains("\"fillOpacity\":0.7"));
        assert!(html.contains("Lat: 3\\nLng: 101\\nValue: 5"));
        assert!(html.contains("\"position\":\"bottomright\""));
        assert!(html.contains("Value Range"));
        Ok(())
    }

    #[test]
    fn test_embedded_markup_cannot_close_script_tag() -> Result<()> {
        let mut document = LeafletDocument::new(&MapSettings::default());
        document.add_overlay(Overlay {
            position: OverlayPosition::TopLeft,
            markup: "</script><script>alert(1)</script>".to_string(),
        });

        let html = document.render_html()?;
        assert_eq!(html.matches("</script>").count(), 2);
        Ok(())
    }

    #[test]
    fn test_title_is_escaped() -> Result<()> {
        let mut settings = MapSettings::default();
        settings.title = "Rain <mm>".to_string();

        let html = LeafletDocument::new(&settings).render_html()?;
        assert!(html.contains("<title>Rain &lt;mm&gt;</title>"));
        Ok(())
    }

    #[test]
    fn test_non_finite_center_is_skipped() -> Result<()> {
        let mut document = LeafletDocument::new(&MapSettings::default());
        document.add_circle(marker(f64::INFINITY, 101.0, Rgb::new(255, 0, 0)));
        document.add_circle(marker(3.0, f64::NEG_INFINITY, Rgb::new(255, 0, 0)));
        document.add_circle(marker(3.0, 101.0, Rgb::new(255, 0, 0)));

        let html = document.render_html()?;
        assert_eq!(document.marker_count(), 1);
        assert!(!html.contains("null"));
        Ok(())
    }
}
