use thiserror::Error;

use crate::Kind;

/// Why a given representation rejected its input.
///
/// These never leave the decoder on their own: they are collected while trying each `Kind`
/// and only shown in debug mode or inside a `DecodeError`.
///
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariantError {
    #[error("Not a JSON object for {0}: {1}")]
    NotAnObject(Kind, String),
    #[error("Too many fields for {kind}: got {got}, need {need}")]
    TooManyFields { kind: Kind, got: usize, need: usize },
    #[error("Not enough fields for {kind}: got {got}, need {need}")]
    NotEnoughFields { kind: Kind, got: usize, need: usize },
    #[error("Missing field for {0}: \"{1}\"")]
    MissingField(Kind, &'static str),
    #[error("Wrong type for field \"{1}\" of {0}, need a {2}")]
    WrongType(Kind, &'static str, &'static str),
    #[error("Invalid value for field \"{1}\" of {0}: {2}")]
    InvalidValue(Kind, &'static str, String),
}

impl VariantError {
    /// Representation that produced the error.
    ///
    pub fn kind(&self) -> Kind {
        match self {
            VariantError::NotAnObject(kind, _)
            | VariantError::MissingField(kind, _)
            | VariantError::WrongType(kind, _, _)
            | VariantError::InvalidValue(kind, _, _) => *kind,
            VariantError::TooManyFields { kind, .. } | VariantError::NotEnoughFields { kind, .. } => {
                *kind
            }
        }
    }
}

/// No representation matched, `text` is the original input.
///
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Cannot decode coordinate: {text}")]
pub struct DecodeError {
    /// Raw text as found in the input
    pub text: String,
    /// One reason per representation tried, in decoding order
    pub reasons: Vec<VariantError>,
}
