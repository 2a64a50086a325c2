use std::path::Path;

use serde::Deserialize;

use crate::error::LocateError;
use crate::pipeline::geometry::haversine_distance;
use crate::types::activity::Locality;

/// Reverse geocoding: coordinate to a named place.
pub trait Locator {
    fn locate(&self, lat: f64, lng: f64) -> Option<Locality>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub city: String,
    pub state_abbr: String,
    pub lat: f64,
    pub lng: f64,
}

/// Nearest-place lookup over a list loaded from CSV.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: Vec<Place>,
}

impl Gazetteer {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn from_path(path: &Path) -> Result<Self, LocateError> {
        let reader = csv::Reader::from_path(path)?;
        Self::from_csv(reader)
    }

    pub fn from_reader<R: std::io::Read>(rdr: R) -> Result<Self, LocateError> {
        Self::from_csv(csv::Reader::from_reader(rdr))
    }

    fn from_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self, LocateError> {
        let places = reader
            .deserialize()
            .collect::<Result<Vec<Place>, csv::Error>>()?;
        Ok(Self { places })
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Locator for Gazetteer {
    fn locate(&self, lat: f64, lng: f64) -> Option<Locality> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }

        self.places
            .iter()
            .map(|place| (haversine_distance(lat, lng, place.lat, place.lng), place))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, place)| Locality {
                city: place.city.clone(),
                state_abbr: place.state_abbr.clone(),
            })
    }
}
