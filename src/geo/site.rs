use std::fmt;
use std::hash::{
    Hash,
    Hasher
};

use crate::math::round::round_float;

/// Mean Earth radius used by [`hdistance`], in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rounds a coordinate to the shared precision and folds `-0.0` into `0.0`
/// so that equal coordinates also share a bit pattern.
pub(crate) fn normalize_coordinate(value: f64) -> f64 {
    let rounded = round_float(value);
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Great-circle (haversine) distance in km between two points given in
/// degrees.
pub fn hdistance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (lon2 - lon1) / 2.0;
    let a = half_dlat.sin().powi(2)
          + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// A geographic point whose coordinates are rounded to 7 decimal places on
/// construction.
///
/// Two sites built from coordinates that differ only past the 7th decimal
/// compare equal and hash identically.
#[derive(Debug, Clone, Copy)]
pub struct Site {
    longitude: f64,
    latitude: f64,
}

impl Site {
    pub fn new(longitude: f64, latitude: f64) -> Site {
        Site {
            longitude: normalize_coordinate(longitude),
            latitude: normalize_coordinate(latitude),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    /// Distance to `other` in km.
    pub fn hdistance(&self, other: &Site) -> f64 {
        hdistance(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn point_wkt(&self) -> String {
        format!("POINT ({} {})", self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for Site {
    fn from((longitude, latitude): (f64, f64)) -> Site {
        Site::new(longitude, latitude)
    }
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        self.longitude.to_bits() == other.longitude.to_bits()
            && self.latitude.to_bits() == other.latitude.to_bits()
    }
}

impl Eq for Site {}

impl Hash for Site {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.longitude.to_bits().hash(state);
        self.latitude.to_bits().hash(state);
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Site({}, {})", self.longitude, self.latitude)
    }
}
