use chrono::{DateTime, FixedOffset};

/// A trackpoint exactly as the parser found it. Text fields are untouched so
/// the normalizer can decide how to clean them.
#[derive(Debug, Clone, Default)]
pub struct RawTrackpoint {
    pub seq: u32,
    pub time: String,
    pub lat: String,
    pub lng: String,
    pub alt_feet: Option<f64>,
    pub dist_miles: Option<f64>,
    pub elapsed_secs: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct RawActivity {
    pub id: String,
    pub first_time: String,
    pub trackpoints: Vec<RawTrackpoint>,
    /// Last trackpoint seen in the file.
    pub current: Option<RawTrackpoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Tcx,
}

impl FileFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_lowercase().as_str() {
            "tcx" => Some(FileFormat::Tcx),
            _ => None,
        }
    }
}

/// Coordinates are NaN when the source text was not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Trackpoint {
    pub lat: f64,
    pub lng: f64,
    pub time: String,
    pub alt_feet: Option<f64>,
    pub dist_miles: Option<f64>,
    pub seq: u32,
}

impl Trackpoint {
    pub fn has_valid_geo(&self) -> bool {
        !(self.lat.is_nan() && self.lng.is_nan())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locality {
    pub city: String,
    pub state_abbr: String,
}

impl Locality {
    pub fn unknown() -> Self {
        Self {
            city: "Unknown".to_string(),
            state_abbr: "??".to_string(),
        }
    }
}

impl std::fmt::Display for Locality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.state_abbr)
    }
}

#[derive(Debug, Clone)]
pub struct Activity {
    pub id: String,
    /// Identifier with the time portion stripped.
    pub date: String,
    pub first_time: String,
    pub start: Option<DateTime<FixedOffset>>,
    pub trackpoints: Vec<Trackpoint>,
    pub current: Trackpoint,
    /// Signed whole minutes from start to the current trackpoint.
    pub duration_mins: f64,
    /// Minutes per mile.
    pub pace: f64,
    pub locality: Locality,
}
