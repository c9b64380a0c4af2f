use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{Geographic, Grid, Kind, NVector, Object, Strict, VariantError};

/// Anything able to report a position as latitude and longitude in degrees.
///
pub trait LatLon {
    fn latitude_degrees(&self) -> f64;
    fn longitude_degrees(&self) -> f64;
}

/// One decoded reading, whatever its representation.
///
/// Serialising gives back the untagged JSON shape it was decoded from.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinate {
    Geographic(Geographic),
    NVector(NVector),
    Grid(Grid),
}

impl Coordinate {
    /// Apply the strict rule of `kind` to an already parsed object.
    ///
    pub fn from_object(kind: Kind, obj: &Object) -> Result<Self, VariantError> {
        match kind {
            Kind::Geographic => Geographic::from_object(obj).map(Coordinate::Geographic),
            Kind::NVector => NVector::from_object(obj).map(Coordinate::NVector),
            Kind::Grid => Grid::from_object(obj).map(Coordinate::Grid),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Coordinate::Geographic(_) => Kind::Geographic,
            Coordinate::NVector(_) => Kind::NVector,
            Coordinate::Grid(_) => Kind::Grid,
        }
    }

    /// Normalise into latitude/longitude.
    ///
    pub fn to_geographic(&self) -> Geographic {
        match self {
            Coordinate::Geographic(p) => *p,
            Coordinate::NVector(v) => v.to_geographic(),
            Coordinate::Grid(g) => g.to_geographic(),
        }
    }
}

impl LatLon for Coordinate {
    fn latitude_degrees(&self) -> f64 {
        match self {
            Coordinate::Geographic(p) => p.latitude_degrees(),
            Coordinate::NVector(v) => v.latitude_degrees(),
            Coordinate::Grid(g) => g.latitude_degrees(),
        }
    }

    fn longitude_degrees(&self) -> f64 {
        match self {
            Coordinate::Geographic(p) => p.longitude_degrees(),
            Coordinate::NVector(v) => v.longitude_degrees(),
            Coordinate::Grid(g) => g.longitude_degrees(),
        }
    }
}

impl<T: LatLon + ?Sized> LatLon for &T {
    fn latitude_degrees(&self) -> f64 {
        (**self).latitude_degrees()
    }

    fn longitude_degrees(&self) -> f64 {
        (**self).longitude_degrees()
    }
}

impl From<Geographic> for Coordinate {
    fn from(value: Geographic) -> Self {
        Coordinate::Geographic(value)
    }
}

impl From<NVector> for Coordinate {
    fn from(value: NVector) -> Self {
        Coordinate::NVector(value)
    }
}

impl From<Grid> for Coordinate {
    fn from(value: Grid) -> Self {
        Coordinate::Grid(value)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let p = self.to_geographic();
        write!(f, "{}({:.6}, {:.6})", self.kind(), p.latitude, p.longitude)
    }
}
