//! Latitude/longitude coordinates
//!
//! Reference for latitude and longitude can be found here:
//!     - <https://en.wikipedia.org/wiki/Latitude>
//!     - <https://en.wikipedia.org/wiki/Longitude>
//!
//! Values are not range-checked, out-of-range angles are used as given.
//!

use serde::Serialize;

use crate::{number, Kind, LatLon, NVector, Object, Strict, VariantError};

/// Position on earth by latitude and longitude, in degrees.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Geographic {
    /// Latitude
    pub latitude: f64,
    /// Longitude
    pub longitude: f64,
}

impl Geographic {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Geographic {
            latitude,
            longitude,
        }
    }

    /// Corresponding n-vector.
    ///
    pub fn to_nvector(&self) -> NVector {
        NVector::from(*self)
    }
}

impl LatLon for Geographic {
    #[inline]
    fn latitude_degrees(&self) -> f64 {
        self.latitude
    }

    #[inline]
    fn longitude_degrees(&self) -> f64 {
        self.longitude
    }
}

impl Strict for Geographic {
    const KIND: Kind = Kind::Geographic;
    const FIELDS: &'static [&'static str] = &["latitude", "longitude"];

    fn from_fields(obj: &Object) -> Result<Self, VariantError> {
        Ok(Geographic {
            latitude: number(Self::KIND, obj, "latitude")?,
            longitude: number(Self::KIND, obj, "longitude")?,
        })
    }
}
