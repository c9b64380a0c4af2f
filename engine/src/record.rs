//! One input line: `<id><TAB><json-object>`.
//!

use tracing::trace;

use tripmeter_formats::{Coordinate, Decoder};

use crate::EngineStatus;

/// A decoded input line.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// Traveler ID
    pub id: i64,
    pub coord: Coordinate,
}

impl Record {
    /// Split on the first TAB, the id may be surrounded by spaces and the payload is everything
    /// after the TAB.  `line` is only used for error reporting.
    ///
    pub fn parse(line: usize, text: &str, decoder: &Decoder) -> Result<Self, EngineStatus> {
        trace!("record::parse({line})");

        let malformed = || EngineStatus::MalformedLine {
            line,
            text: text.to_string(),
        };

        let (id, payload) = text.split_once('\t').ok_or_else(malformed)?;
        let id = id.trim().parse::<i64>().map_err(|_| malformed())?;
        let coord = decoder
            .decode(payload)
            .map_err(|source| EngineStatus::DecodeExhausted { line, source })?;

        Ok(Record { id, coord })
    }
}
