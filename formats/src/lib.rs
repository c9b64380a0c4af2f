//! Definition of the coordinate formats
//!
//! A reading can come in one of three representations and none of them carries a type tag:
//!
//! - `Geographic`: `{"latitude": .., "longitude": ..}`
//! - `NVector`: `{"x": .., "y": .., "z": ..}`
//! - `Grid` (UTM): `{"easting": .., "northing": .., "zone_number": .., "zone_letter": ".."}`
//!
//! The `Decoder` tries each of them in a fixed order with strict field matching (exact
//! count, exact names, exact types), first success wins.  Every variant can report its
//! position as latitude/longitude through the `LatLon` trait, which is all the distance
//! code needs.
//!
//! To add a new format, add a `Kind`, implement `Strict` and `LatLon` for it and hook it
//! into `Coordinate`.
//!

// Re-export for convenience
//
pub use convert::*;
pub use coordinate::*;
pub use decode::*;
pub use distance::*;
pub use error::*;
pub use format::*;
pub use geographic::*;
pub use grid::*;
pub use nvector::*;

mod convert;
mod coordinate;
mod decode;
mod distance;
mod error;
mod format;
mod geographic;
mod grid;
mod nvector;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
