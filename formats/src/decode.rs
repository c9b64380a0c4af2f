//! Strict decoding of a coordinate without type tag.
//!
//! Each representation owns a strict rule (see `Strict`): the JSON object must have exactly
//! its number of fields, exactly its field names and the right type for every value.  The
//! `Decoder` tries them in `Kind::PRIORITY` order and keeps the first one that matches.
//! Field sets never overlap so at most one can match a well-formed input.
//!

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{Coordinate, DecodeError, Kind, VariantError};

/// A JSON object as parsed by `serde_json`.
///
pub type Object = Map<String, Value>;

/// Strict matching rule for one representation.
///
pub trait Strict: Sized {
    /// Which representation this is.
    const KIND: Kind;
    /// Exact list of field names.
    const FIELDS: &'static [&'static str];

    /// Build the value once the shape is known to be right, checking the types.
    ///
    fn from_fields(obj: &Object) -> Result<Self, VariantError>;

    /// Check count and names, then types.
    ///
    fn from_object(obj: &Object) -> Result<Self, VariantError> {
        check_shape(Self::KIND, Self::FIELDS, obj)?;
        Self::from_fields(obj)
    }

    /// Parse `text` as a JSON object and apply the rule.
    ///
    fn from_json(text: &str) -> Result<Self, VariantError> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(obj)) => Self::from_object(&obj),
            Ok(other) => Err(VariantError::NotAnObject(Self::KIND, json_type(&other).into())),
            Err(e) => Err(VariantError::NotAnObject(Self::KIND, e.to_string())),
        }
    }
}

/// Exact count first, then every expected name must be there.
///
pub fn check_shape(kind: Kind, fields: &[&'static str], obj: &Object) -> Result<(), VariantError> {
    let (got, need) = (obj.len(), fields.len());
    if got > need {
        return Err(VariantError::TooManyFields { kind, got, need });
    }
    if got < need {
        return Err(VariantError::NotEnoughFields { kind, got, need });
    }
    match fields.iter().find(|name| !obj.contains_key(**name)) {
        Some(name) => Err(VariantError::MissingField(kind, name)),
        None => Ok(()),
    }
}

/// Fetch a numeric field, integers are accepted as well.
///
pub fn number(kind: Kind, obj: &Object, name: &'static str) -> Result<f64, VariantError> {
    match obj.get(name) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| VariantError::InvalidValue(kind, name, n.to_string())),
        Some(_) => Err(VariantError::WrongType(kind, name, "number")),
        None => Err(VariantError::MissingField(kind, name)),
    }
}

/// Fetch a textual field.
///
pub fn text<'a>(kind: Kind, obj: &'a Object, name: &'static str) -> Result<&'a str, VariantError> {
    match obj.get(name) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(VariantError::WrongType(kind, name, "string")),
        None => Err(VariantError::MissingField(kind, name)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Turns raw text into exactly one `Coordinate`.
///
/// `debug` replaces any global flag: when set, every rejected representation is logged.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoder {
    debug: bool,
}

impl Decoder {
    pub fn new(debug: bool) -> Self {
        Decoder { debug }
    }

    /// Try every representation in priority order, first match wins.
    ///
    pub fn decode(&self, text: &str) -> Result<Coordinate, DecodeError> {
        trace!("decode({text})");

        let parsed = serde_json::from_str::<Value>(text);
        let mut reasons = Vec::with_capacity(Kind::PRIORITY.len());

        for kind in Kind::PRIORITY {
            let attempt = match &parsed {
                Ok(Value::Object(obj)) => Coordinate::from_object(kind, obj),
                Ok(other) => Err(VariantError::NotAnObject(kind, json_type(other).into())),
                Err(e) => Err(VariantError::NotAnObject(kind, e.to_string())),
            };

            match attempt {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    if self.debug {
                        debug!("{e}");
                    }
                    reasons.push(e);
                }
            }
        }
        Err(DecodeError {
            text: text.to_string(),
            reasons,
        })
    }
}
