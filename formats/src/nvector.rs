//! Bidirectional n-vector converter
//!
//! Reference for n-vector can be found here: <https://en.wikipedia.org/wiki/N-vector>
//!

use serde::Serialize;

use crate::{
    geographic_to_nvector, number, nvector_to_geographic, Geographic, Kind, LatLon, Object,
    Strict, VariantError,
};

/// Position on earth in the n-vector horizontal position representation.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct NVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl NVector {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        NVector { x, y, z }
    }

    /// Convert into its corresponding latitude/longitude.
    ///
    pub fn to_geographic(&self) -> Geographic {
        let (lat, lon) = nvector_to_geographic(self.x, self.y, self.z);
        Geographic::new(lat, lon)
    }
}

impl From<Geographic> for NVector {
    fn from(value: Geographic) -> Self {
        let (x, y, z) = geographic_to_nvector(value.latitude, value.longitude);
        NVector { x, y, z }
    }
}

impl From<NVector> for Geographic {
    fn from(value: NVector) -> Self {
        value.to_geographic()
    }
}

impl LatLon for NVector {
    fn latitude_degrees(&self) -> f64 {
        self.to_geographic().latitude
    }

    fn longitude_degrees(&self) -> f64 {
        self.to_geographic().longitude
    }
}

impl Strict for NVector {
    const KIND: Kind = Kind::NVector;
    const FIELDS: &'static [&'static str] = &["x", "y", "z"];

    fn from_fields(obj: &Object) -> Result<Self, VariantError> {
        Ok(NVector {
            x: number(Self::KIND, obj, "x")?,
            y: number(Self::KIND, obj, "y")?,
            z: number(Self::KIND, obj, "z")?,
        })
    }
}
