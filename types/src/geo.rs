//! Geographic coordinates.
//!
//! All points use the longitude-first ordering of the backend's GeoJSON
//! payloads. A [`GeoPoint`] can only be built through a validating
//! constructor, so every point held by the rest of the workspace is finite
//! and within range.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypesError;

/// A validated `(longitude, latitude)` pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = TypesError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.longitude, raw.latitude)
    }
}

impl GeoPoint {
    pub const MAX_LONGITUDE: f64 = 180.0;
    pub const MAX_LATITUDE: f64 = 90.0;

    /// Build a point, rejecting non-finite or out-of-range values.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, TypesError> {
        if !longitude.is_finite() || longitude.abs() > Self::MAX_LONGITUDE {
            return Err(TypesError::InvalidLongitude(longitude));
        }
        if !latitude.is_finite() || latitude.abs() > Self::MAX_LATITUDE {
            return Err(TypesError::InvalidLatitude(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

/// Rendered latitude-first with six decimals, the way operators read maps.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// A location as it travels over the wire: `{"type": "Point", "coordinates": [lng, lat]}`.
///
/// Nothing is validated at deserialization time; the backend is allowed to
/// send partial data and the verification path decides what to do with it
/// via [`GeoLocation::to_point`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

fn default_kind() -> String {
    "Point".to_string()
}

impl GeoLocation {
    /// Convert to a validated point.
    ///
    /// Any missing, short, non-finite or out-of-range coordinate collapses to
    /// [`TypesError::LocationUnavailable`].
    pub fn to_point(&self) -> Result<GeoPoint, TypesError> {
        match self.coordinates.as_slice() {
            [lng, lat, ..] => {
                GeoPoint::new(*lng, *lat).map_err(|_| TypesError::LocationUnavailable)
            }
            _ => Err(TypesError::LocationUnavailable),
        }
    }
}

impl From<GeoPoint> for GeoLocation {
    fn from(p: GeoPoint) -> Self {
        Self {
            kind: default_kind(),
            coordinates: vec![p.longitude, p.latitude],
        }
    }
}
