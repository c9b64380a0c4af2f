use serde::Serialize;

use tripmeter_formats::{Coordinate, Formula};

use crate::Record;

/// All the consecutive readings of one traveler, in input order.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    pub id: i64,
    pub points: Vec<Coordinate>,
}

impl Trip {
    /// Open a new trip with its first reading.
    ///
    pub fn new(rec: Record) -> Self {
        Trip {
            id: rec.id,
            points: vec![rec.coord],
        }
    }

    #[inline]
    pub fn push(&mut self, coord: Coordinate) {
        self.points.push(coord);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of the legs, 0 for a single point.
    ///
    pub fn total(&self, formula: Formula, radius: f64) -> Total {
        Total {
            id: self.id,
            points: self.len(),
            distance: formula.path_length(&self.points, radius),
        }
    }
}

/// Travelled distance for one trip.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Total {
    pub id: i64,
    /// Number of readings in the trip
    pub points: usize,
    /// In the unit of the radius used
    pub distance: f64,
}
