//! Value types for map chunks.

use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees.
///
/// Coordinates are carried exactly as they appear in the tile key. No range
/// checks are applied: values outside the usual latitude/longitude bounds,
/// and even the NaN produced by an unparseable key group, pass through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Rectangular map chunk described by two corner points.
///
/// The first corner in a tile key is `top_left`, the second `bottom_right`.
/// The field names describe the intended orientation only; no ordering
/// between the corners is enforced, so an inverted or degenerate box is
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// First corner of the chunk (north-west by convention)
    pub top_left: GeoPoint,
    /// Second corner of the chunk (south-east by convention)
    pub bottom_right: GeoPoint,
}

impl BoundingBox {
    /// Creates a bounding box from its two corner points.
    pub fn new(top_left: GeoPoint, bottom_right: GeoPoint) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Creates a bounding box directly from corner coordinates, first corner
    /// then second corner.
    pub fn from_corners(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Self {
        Self {
            top_left: GeoPoint::new(lat1, lon1),
            bottom_right: GeoPoint::new(lat2, lon2),
        }
    }
}
