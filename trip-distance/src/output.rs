//! Rendering of `Total`s on stdout.
//!

use std::io::Write;

use eyre::Result;
use serde::{Deserialize, Serialize};
use strum::{EnumString, VariantNames};

use tripmeter_engine::Total;

/// Decimals beyond this carry no information for an `f64`.
pub const MAX_PRECISION: usize = 17;

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
pub enum Output {
    /// `<id><TAB><distance>`
    #[default]
    Text,
    /// `id,points,distance` with a header line
    Csv,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Serialize)]
struct Line {
    id: i64,
    points: usize,
    distance: f64,
}

/// Round `value` to `precision` decimals.
///
fn round_to(value: f64, precision: usize) -> f64 {
    let p = 10f64.powi(precision.min(15) as i32);
    (value * p).round() / p
}

impl Output {
    /// Header to print before the first line, if any.
    ///
    pub fn header(&self) -> Option<&'static str> {
        match self {
            Output::Csv => Some("id,points,distance"),
            _ => None,
        }
    }

    pub fn render(&self, t: &Total, precision: usize) -> Result<String> {
        let precision = precision.min(MAX_PRECISION);
        let s = match self {
            Output::Text => format!("{}\t{:.*}", t.id, precision, t.distance),
            Output::Csv => format!("{},{},{:.*}", t.id, t.points, precision, t.distance),
            Output::Json => serde_json::to_string(&Line {
                id: t.id,
                points: t.points,
                distance: round_to(t.distance, precision),
            })?,
        };
        Ok(s)
    }
}

/// Writes every `Total` it is given in the selected format.
///
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    format: Output,
    precision: usize,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: Output, precision: usize) -> Result<Self> {
        let mut out = out;
        if let Some(h) = format.header() {
            writeln!(out, "{h}")?;
        }
        Ok(Printer {
            out,
            format,
            precision,
        })
    }

    pub fn print(&mut self, t: &Total) -> Result<()> {
        let line = self.format.render(t, self.precision)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
