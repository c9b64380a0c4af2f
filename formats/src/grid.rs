//! UTM grid coordinates
//!
//! Universal Transverse Mercator on the WGS84 ellipsoid, see
//! <https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system>.
//!
//! The inverse projection uses the footpoint latitude series from Snyder, "Map Projections:
//! A Working Manual" (USGS PP 1395), p. 63.  Precision is well below the metre inside a zone
//! which is more than enough for trip distances.
//!
//! Zone exceptions for Norway and Svalbard are not handled by `from_lat_lon()`.
//!

use std::f64::consts::PI;

use serde::Serialize;

use crate::{number, text, Geographic, Kind, LatLon, Object, Strict, VariantError};

/// Scale factor on the central meridian
const K0: f64 = 0.9996;
/// WGS84 semi-major axis in metres
const A: f64 = 6_378_137.0;
/// WGS84 first eccentricity squared
const E: f64 = 0.006_694_379_990_14;
const E2: f64 = E * E;
const E3: f64 = E2 * E;
/// Second eccentricity squared
const E_P2: f64 = E / (1. - E);

const M1: f64 = 1. - E / 4. - 3. * E2 / 64. - 5. * E3 / 256.;
const M2: f64 = 3. * E / 8. + 3. * E2 / 32. + 45. * E3 / 1024.;
const M3: f64 = 15. * E2 / 256. + 45. * E3 / 1024.;
const M4: f64 = 35. * E3 / 3072.;

const FALSE_EASTING: f64 = 500_000.;
const FALSE_NORTHING: f64 = 10_000_000.;

/// Latitude bands, 8° each from 80°S, X is 12° high.
const BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";

/// Position on earth as UTM easting/northing (metres) within a zone.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Grid {
    pub easting: f64,
    pub northing: f64,
    /// 1 to 60
    pub zone_number: u8,
    /// Latitude band, C to X without I and O
    pub zone_letter: char,
}

impl Grid {
    /// Check the zone before building the coordinate.
    ///
    pub fn new(
        easting: f64,
        northing: f64,
        zone_number: u8,
        zone_letter: char,
    ) -> Result<Self, VariantError> {
        if !(1..=60).contains(&zone_number) {
            return Err(VariantError::InvalidValue(
                Kind::Grid,
                "zone_number",
                zone_number.to_string(),
            ));
        }
        let zone_letter = zone_letter.to_ascii_uppercase();
        if !BANDS.contains(zone_letter) {
            return Err(VariantError::InvalidValue(
                Kind::Grid,
                "zone_letter",
                zone_letter.to_string(),
            ));
        }
        Ok(Grid {
            easting,
            northing,
            zone_number,
            zone_letter,
        })
    }

    /// Bands N and above are north of the equator.
    ///
    #[inline]
    pub fn is_northern(&self) -> bool {
        self.zone_letter >= 'N'
    }

    /// Inverse projection.
    ///
    pub fn to_geographic(&self) -> Geographic {
        let x = self.easting - FALSE_EASTING;
        let y = if self.is_northern() {
            self.northing
        } else {
            self.northing - FALSE_NORTHING
        };

        // Footpoint latitude
        //
        let m = y / K0;
        let mu = m / (A * M1);

        let e1 = (1. - (1. - E).sqrt()) / (1. + (1. - E).sqrt());
        let (e1_2, e1_3) = (e1 * e1, e1 * e1 * e1);
        let e1_4 = e1_2 * e1_2;

        let phi1 = mu
            + (3. * e1 / 2. - 27. * e1_3 / 32.) * (2. * mu).sin()
            + (21. * e1_2 / 16. - 55. * e1_4 / 32.) * (4. * mu).sin()
            + (151. * e1_3 / 96.) * (6. * mu).sin()
            + (1097. * e1_4 / 512.) * (8. * mu).sin();

        let (sin1, cos1) = phi1.sin_cos();
        let tan1 = sin1 / cos1;
        let t1 = tan1 * tan1;
        let c1 = E_P2 * cos1 * cos1;
        let w = 1. - E * sin1 * sin1;
        let n1 = A / w.sqrt();
        let r1 = A * (1. - E) / w.powf(1.5);
        let d = x / (n1 * K0);
        let (d2, d3) = (d * d, d * d * d);
        let (d4, d5, d6) = (d2 * d2, d2 * d3, d3 * d3);

        let lat = phi1
            - (n1 * tan1 / r1)
                * (d2 / 2.
                    - (5. + 3. * t1 + 10. * c1 - 4. * c1 * c1 - 9. * E_P2) * d4 / 24.
                    + (61. + 90. * t1 + 298. * c1 + 45. * t1 * t1 - 252. * E_P2 - 3. * c1 * c1)
                        * d6
                        / 720.);

        let lon = (d - (1. + 2. * t1 + c1) * d3 / 6.
            + (5. - 2. * c1 + 28. * t1 - 3. * c1 * c1 + 8. * E_P2 + 24. * t1 * t1) * d5 / 120.)
            / cos1;
        let lon = normalize(lon + central_meridian(self.zone_number).to_radians());

        Geographic::new(lat.to_degrees(), lon.to_degrees())
    }

    /// Forward projection into the standard zone for `lon`.
    ///
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        let zone_number = zone_number(lon);
        let zone_letter = zone_letter(lat);

        let phi = lat.to_radians();
        let (sin, cos) = phi.sin_cos();
        let tan = sin / cos;
        let t = tan * tan;
        let c = E_P2 * cos * cos;
        let n = A / (1. - E * sin * sin).sqrt();
        let a = cos * normalize((lon - central_meridian(zone_number)).to_radians());
        let (a2, a3) = (a * a, a * a * a);
        let (a4, a5, a6) = (a2 * a2, a2 * a3, a3 * a3);

        let m = A
            * (M1 * phi - M2 * (2. * phi).sin() + M3 * (4. * phi).sin() - M4 * (6. * phi).sin());

        let easting = K0
            * n
            * (a + (1. - t + c) * a3 / 6. + (5. - 18. * t + t * t + 72. * c - 58. * E_P2) * a5 / 120.)
            + FALSE_EASTING;
        let mut northing = K0
            * (m + n
                * tan
                * (a2 / 2.
                    + (5. - t + 9. * c + 4. * c * c) * a4 / 24.
                    + (61. - 58. * t + t * t + 600. * c - 330. * E_P2) * a6 / 720.));
        if lat < 0. {
            northing += FALSE_NORTHING;
        }

        Grid {
            easting,
            northing,
            zone_number,
            zone_letter,
        }
    }
}

/// Longitude of the central meridian of `zone`, in degrees.
///
#[inline]
fn central_meridian(zone: u8) -> f64 {
    (zone as f64 - 1.) * 6. - 180. + 3.
}

/// Standard zone for a longitude, wrapped into [-180°, 180°) first.
///
fn zone_number(lon: f64) -> u8 {
    let lon = (lon + 180.).rem_euclid(360.) - 180.;
    (((lon + 180.) / 6.).floor() as u8 + 1).min(60)
}

/// Latitude band, clamped to C and X outside of 80°S..84°N.
///
fn zone_letter(lat: f64) -> char {
    let idx = ((lat + 80.) / 8.).floor().clamp(0., (BANDS.len() - 1) as f64) as usize;
    BANDS.as_bytes()[idx] as char
}

/// Bring an angle in radians back into [-π, π).
///
#[inline]
fn normalize(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2. * PI) - PI
}

impl LatLon for Grid {
    fn latitude_degrees(&self) -> f64 {
        self.to_geographic().latitude
    }

    fn longitude_degrees(&self) -> f64 {
        self.to_geographic().longitude
    }
}

impl Strict for Grid {
    const KIND: Kind = Kind::Grid;
    const FIELDS: &'static [&'static str] = &["easting", "northing", "zone_number", "zone_letter"];

    fn from_fields(obj: &Object) -> Result<Self, VariantError> {
        let easting = number(Self::KIND, obj, "easting")?;
        let northing = number(Self::KIND, obj, "northing")?;

        let zone = number(Self::KIND, obj, "zone_number")?;
        if zone.fract() != 0. || !(1. ..=60.).contains(&zone) {
            return Err(VariantError::InvalidValue(
                Self::KIND,
                "zone_number",
                zone.to_string(),
            ));
        }

        let letter = text(Self::KIND, obj, "zone_letter")?;
        let mut chars = letter.chars();
        let zone_letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(VariantError::InvalidValue(
                    Self::KIND,
                    "zone_letter",
                    letter.to_string(),
                ))
            }
        };

        Grid::new(easting, northing, zone as u8, zone_letter)
    }
}
