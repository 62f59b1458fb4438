/// Gradient endpoints (RGB)
pub const GRADIENT_LOW: [u8; 3] = [0, 255, 0];
pub const GRADIENT_HIGH: [u8; 3] = [255, 0, 0];

/// Value mapped to the high end of the gradient; the low end is 0
pub const GRADIENT_MAX_VALUE: f64 = 10.0;

/// Swatch used for markers whose value could not be parsed
pub const MISSING_VALUE_COLOR: [u8; 3] = [128, 128, 128];

/// Legend band lower bounds; the last band is open-ended
pub const LEGEND_THRESHOLDS: [f64; 6] = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];

/// Offset into a band used to pick its representative swatch
pub const LEGEND_SWATCH_OFFSET: f64 = 1.0;
pub const LEGEND_TITLE: &str = "Value Range";

/// Marker defaults
pub const DEFAULT_MARKER_RADIUS_M: f64 = 100.0;
pub const DEFAULT_FILL_OPACITY: f64 = 0.7;

/// Map view defaults (Selangor)
pub const DEFAULT_CENTER_LAT: f64 = 3.1390;
pub const DEFAULT_CENTER_LNG: f64 = 101.6869;
pub const DEFAULT_ZOOM: u8 = 10;

/// Tile provider
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const DEFAULT_MAP_TITLE: &str = "Point Map";

/// Leaflet assets
pub const LEAFLET_VERSION: &str = "1.9.4";

/// Input format
pub const FIELD_DELIMITER: char = ',';
pub const LINE_DELIMITER: char = '\n';

/// Output formats
pub const FORMAT_HTML: &str = "html";
pub const FORMAT_GEOJSON: &str = "geojson";
