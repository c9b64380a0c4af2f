//! Great-circle distances on a spherical earth.
//!
//! Two classic formulas are available, see <https://www.movable-type.co.uk/scripts/latlong.html>.
//! Haversine is the default as it is well-conditioned for small distances.  Results are in the
//! unit of the radius, kilometers with `EARTH_RADIUS`.
//!

use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use crate::LatLon;

/// Earth radius in km
pub const EARTH_RADIUS: f64 = 6_371.0;

/// Which great-circle formula to use.
///
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    PartialEq,
    Eq,
    Serialize,
    strum::Display,
    EnumString,
    VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    #[default]
    Haversine,
    Cosines,
}

impl Formula {
    #[inline]
    pub fn distance_with<A: LatLon, B: LatLon>(&self, a: A, b: B, radius: f64) -> f64 {
        match self {
            Formula::Haversine => haversine(a, b, radius),
            Formula::Cosines => spherical_cosines(a, b, radius),
        }
    }

    /// Sum of the distances between consecutive points, 0 for less than two points.
    ///
    pub fn path_length<T: LatLon>(&self, points: &[T], radius: f64) -> f64 {
        points
            .windows(2)
            .map(|w| self.distance_with(&w[0], &w[1], radius))
            .fold(0.0, |acc, d| acc + d)
    }
}

/// Haversine distance with the default radius.
///
#[inline]
pub fn distance<A: LatLon, B: LatLon>(a: A, b: B) -> f64 {
    haversine(a, b, EARTH_RADIUS)
}

pub fn haversine<A: LatLon, B: LatLon>(a: A, b: B, radius: f64) -> f64 {
    let (lat1, lat2) = (a.latitude_degrees(), b.latitude_degrees());
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (b.longitude_degrees() - a.longitude_degrees()).to_radians();

    let s_lat = (d_lat / 2.0).sin();
    let s_lon = (d_lon / 2.0).sin();
    let h = s_lat * s_lat + lat1.to_radians().cos() * lat2.to_radians().cos() * s_lon * s_lon;

    // Rounding can push `h` slightly past 1 for antipodal points.
    2.0 * radius * h.clamp(0.0, 1.0).sqrt().asin()
}

pub fn spherical_cosines<A: LatLon, B: LatLon>(a: A, b: B, radius: f64) -> f64 {
    let (lat1, lon1) = (a.latitude_degrees(), a.longitude_degrees());
    let (lat2, lon2) = (b.latitude_degrees(), b.longitude_degrees());

    // acos is badly conditioned near 1 and would not give back an exact 0.
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let d_lon = (lon2 - lon1).to_radians();

    let c = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();
    radius * c.clamp(-1.0, 1.0).acos()
}
