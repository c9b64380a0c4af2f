//! Conversions between latitude/longitude and n-vectors.
//!
//! See <https://en.wikipedia.org/wiki/N-vector>.  All angles are in degrees at the
//! boundary, n-vector components are plain unit-vector components and are never scaled.
//!

/// Convert an n-vector into (latitude, longitude) in degrees.
///
/// The vector does not need to be normalised.  At the poles (`x = y = 0`) longitude is
/// undefined and `atan2(0, 0)` gives 0.
///
#[inline]
pub fn nvector_to_geographic(x: f64, y: f64, z: f64) -> (f64, f64) {
    let lat = z.atan2(x.hypot(y));
    let lon = y.atan2(x);
    (lat.to_degrees(), lon.to_degrees())
}

/// Convert (latitude, longitude) in degrees into an n-vector (x, y, z).
///
#[inline]
pub fn geographic_to_nvector(lat: f64, lon: f64) -> (f64, f64, f64) {
    let (rlat, rlon) = (lat.to_radians(), lon.to_radians());

    let x = rlat.cos() * rlon.cos();
    let y = rlat.cos() * rlon.sin();
    let z = rlat.sin();
    (x, y, z)
}
