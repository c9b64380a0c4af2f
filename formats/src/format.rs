use serde::Serialize;
use strum::EnumString;

use crate::{Geographic, Grid, NVector, Strict};

/// The `Kind` enum represents the coordinate representations we know how to decode.
///
/// There is no tag in the data, a reading is recognised by its exact field set.  The
/// variants are listed here in decoding order.
///
/// ## Example Usage
///
/// ```rust
/// use tripmeter_formats::Kind;
///
/// let kind: Kind = "nvector".parse().unwrap();
/// assert_eq!(Kind::NVector, kind);
/// assert_eq!(&["x", "y", "z"], kind.fields());
/// ```
///
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    EnumString,
    Serialize,
    strum::VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Latitude/longitude in degrees
    Geographic,
    /// Cartesian unit vector
    NVector,
    /// UTM easting/northing plus zone
    Grid,
}

impl Kind {
    /// Order in which the decoder tries each representation.
    ///
    pub const PRIORITY: [Kind; 3] = [Kind::Geographic, Kind::NVector, Kind::Grid];

    /// Exact set of field names for this representation.
    ///
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Kind::Geographic => Geographic::FIELDS,
            Kind::NVector => NVector::FIELDS,
            Kind::Grid => Grid::FIELDS,
        }
    }

    /// List all supported representations with their fields, one per line.
    ///
    pub fn list() -> String {
        Kind::PRIORITY
            .iter()
            .map(|k| format!("{:12}{}", k.to_string(), k.fields().join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[rstest]
    #[case("geographic", Kind::Geographic)]
    #[case("NVector", Kind::NVector)]
    #[case("GRID", Kind::Grid)]
    fn test_kind_from_str(#[case] s: &str, #[case] kind: Kind) {
        assert_eq!(kind, Kind::from_str(s).unwrap());
    }

    #[test]
    fn test_kind_unknown() {
        assert!(Kind::from_str("utm").is_err());
    }

    #[test]
    fn test_field_sets_are_disjoint() {
        let mut seen = HashSet::new();
        let mut counts = HashSet::new();

        for kind in Kind::PRIORITY {
            assert!(counts.insert(kind.fields().len()));
            for field in kind.fields() {
                assert!(seen.insert(*field), "{field} used twice");
            }
        }
    }

    #[test]
    fn test_kind_list() {
        let list = Kind::list();
        assert_eq!(3, list.lines().count());
        assert!(list.contains("zone_letter"));
    }
}
