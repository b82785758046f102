use std::fmt;

use crate::geo::site::Site;
use crate::shapeerror::ShapeError;

/// Closed polygon ring of normalized vertices; the last vertex repeats the
/// first.
///
/// Only coordinate canonicalization is handled here. Winding and
/// self-intersection are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    vertices: Vec<Site>,
}

impl Region {
    /// Axis-aligned box from two opposite corners.
    ///
    /// The ring runs `upper_left`, `(lower_right.lon, upper_left.lat)`,
    /// `lower_right`, `(upper_left.lon, lower_right.lat)` and back to
    /// `upper_left`.
    pub fn from_simple(upper_left: (f64, f64), lower_right: (f64, f64)) -> Region {
        let (ul_lon, ul_lat) = upper_left;
        let (lr_lon, lr_lat) = lower_right;
        let upper_left = Site::new(ul_lon, ul_lat);

        Region {
            vertices: vec![
                upper_left,
                Site::new(lr_lon, ul_lat),
                Site::new(lr_lon, lr_lat),
                Site::new(ul_lon, lr_lat),
                upper_left,
            ],
        }
    }

    /// Polygon from an ordered list of `(lon, lat)` vertices. The ring is
    /// closed if the input does not already end on its first vertex.
    pub fn from_coordinates(points: &[(f64, f64)]) -> Result<Region, ShapeError> {
        let mut vertices: Vec<Site> = points
            .iter()
            .map(|&pt| Site::from(pt))
            .collect();

        let open_len = match (vertices.first(), vertices.last()) {
            (Some(first), Some(last)) if vertices.len() > 1 && first == last => vertices.len() - 1,
            _ => vertices.len(),
        };
        if open_len < 3 {
            tracing::debug!(vertices = open_len, "rejecting region");
            return Err(ShapeError::TooFewVertices(open_len));
        }

        if open_len == vertices.len() {
            vertices.push(vertices[0]);
        }
        Ok(Region { vertices })
    }

    /// Ring vertices, closing vertex included.
    pub fn vertices(&self) -> &[Site] {
        &self.vertices
    }

    /// `(min_lon, min_lat, max_lon, max_lat)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.vertices.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_lon, min_lat, max_lon, max_lat), site| (
                min_lon.min(site.longitude()),
                min_lat.min(site.latitude()),
                max_lon.max(site.longitude()),
                max_lat.max(site.latitude()),
            ),
        )
    }

    pub fn lower_left_corner(&self) -> Site {
        let (min_lon, min_lat, _, _) = self.bounds();
        Site::new(min_lon, min_lat)
    }

    pub fn upper_right_corner(&self) -> Site {
        let (_, _, max_lon, max_lat) = self.bounds();
        Site::new(max_lon, max_lat)
    }

    /// Well-known-text polygon, e.g. `POLYGON ((1 2, 3 2, 3 4, 1 2))`.
    pub fn wkt(&self) -> String {
        let coords: Vec<String> = self.vertices
            .iter()
            .map(|site| format!("{} {}", site.longitude(), site.latitude()))
            .collect();
        format!("POLYGON (({}))", coords.join(", "))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wkt())
    }
}
