use tripmeter_formats::{Formula, EARTH_RADIUS};

/// Runtime knobs passed down into the stages.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    /// Log every rejected format while decoding
    pub debug: bool,
    pub formula: Formula,
    /// Radius of the sphere, distances come out in the same unit
    pub radius: f64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            debug: false,
            formula: Formula::default(),
            radius: EARTH_RADIUS,
        }
    }
}
