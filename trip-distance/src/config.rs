//! Settings from `$HOME/.config/tripmeter/config.hcl`, all optional.
//!
//! ```hcl
//! version = 1
//! formula = "cosines"
//! radius = 6371.0088
//! precision = 4
//! output = "csv"
//! ```
//!

use serde::Deserialize;

use tripmeter_common::Versioned;
use tripmeter_engine::Options;
use tripmeter_formats::{Formula, EARTH_RADIUS};

use crate::cli::Opts;
use crate::output::Output;

/// Current version
const CVERSION: usize = 1;

/// Default number of decimals
const PRECISION: usize = 3;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub version: usize,
    pub debug: bool,
    pub formula: Formula,
    /// In km
    pub radius: f64,
    pub precision: usize,
    pub output: Output,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: CVERSION,
            debug: false,
            formula: Formula::default(),
            radius: EARTH_RADIUS,
            precision: PRECISION,
            output: Output::default(),
        }
    }
}

impl Versioned for Settings {
    const VERSION: usize = CVERSION;

    fn version(&self) -> usize {
        self.version
    }
}

impl Settings {
    /// Command-line flags win over the file.
    ///
    pub fn merge(mut self, opts: &Opts) -> Self {
        self.debug |= opts.debug;
        if let Some(f) = opts.formula {
            self.formula = f;
        }
        if let Some(p) = opts.precision {
            self.precision = usize::from(p);
        }
        if let Some(o) = opts.format {
            self.output = o;
        }
        self
    }

    pub fn options(&self) -> Options {
        Options {
            debug: self.debug,
            formula: self.formula,
            radius: self.radius,
        }
    }
}
