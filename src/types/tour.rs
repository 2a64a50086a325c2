#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lng: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(point: Point) -> Self {
        geo::coord! { x: point.lng, y: point.lat }
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraMove {
    /// Degrees in `[0, 360)`, 0 pointing north.
    pub heading: u16,
    /// Seconds.
    pub duration: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub tilt: f64,
    pub range: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenOverlay {
    pub x: f64,
    pub y: f64,
}

impl Default for ScreenOverlay {
    fn default() -> Self {
        Self { x: 0.066, y: 0.933 }
    }
}

#[derive(Debug, Clone)]
pub struct TourOptions {
    /// Douglas-Peucker tolerance in degrees.
    pub tolerance: f64,
    /// Planar distance units per second of camera travel.
    pub camera_speed: f64,
    pub min_duration: f64,
    pub tilt: f64,
    pub range: f64,
    pub overlay: ScreenOverlay,
    pub line_color: String,
    pub line_width: f64,
}

impl Default for TourOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.00004,
            camera_speed: 0.004,
            min_duration: 0.2,
            tilt: 77.0,
            range: 55.0,
            overlay: ScreenOverlay::default(),
            line_color: "ccffdd66".to_string(),
            line_width: 2.0,
        }
    }
}

/// Everything needed to write one tour file. Built once per activity.
#[derive(Debug, Clone)]
pub struct Tour {
    pub name: String,
    pub moves: Vec<CameraMove>,
    /// Full-resolution path for the line overlay.
    pub path: Vec<Point>,
    /// File name of the caption image, relative to the tour file.
    pub caption_href: Option<String>,
    pub overlay: ScreenOverlay,
    pub line_color: String,
    pub line_width: f64,
}
