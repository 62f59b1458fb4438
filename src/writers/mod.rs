pub mod geojson_writer;
pub mod leaflet_writer;
pub mod legend_builder;
pub mod map_surface;
pub mod marker_renderer;
pub mod rejection_writer;

pub use geojson_writer::GeoJsonDocument;
pub use leaflet_writer::LeafletDocument;
pub use legend_builder::{legend_bands, LegendBuilder};
pub use map_surface::{CircleMarker, LatLng, MapSurface, MapView, MemorySurface, Overlay};
pub use marker_renderer::MarkerRenderer;
pub use rejection_writer::RejectionWriter;

use crate::error::Result;
use std::path::Path;

/// A map surface that serializes to a standalone file.
pub trait MapDocument: MapSurface {
    fn render(&self) -> Result<String>;

    fn write_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.render()?)?;
        Ok(())
    }
}
