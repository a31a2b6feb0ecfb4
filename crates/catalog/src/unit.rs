//! Area units and their conversion multipliers to square meters.

use crate::error::CatalogError;

/// Area units selectable for the site area input.
///
/// The rai is the Thai land unit the capital-cost baselines are quoted
/// against; one rai is exactly 1600 m².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AreaUnit {
    /// Square meter (the internal base unit).
    #[default]
    SquareMeter = 0,
    /// Thai rai, 1600 m².
    Rai = 1,
    /// Hectare, 10 000 m².
    Hectare = 2,
    /// International acre, 4046.86 m².
    Acre = 3,
}

/// Per-unit data: `(display name, multiplier to m²)`.
#[rustfmt::skip]
const UNIT_TABLE: [(&str, f64); 4] = [
    ("m²",          1.0),
    ("Rai",      1600.0),
    ("Hectare", 10000.0),
    ("Acre",    4046.86),
];

impl AreaUnit {
    /// All units in table order.
    pub const ALL: [AreaUnit; 4] = [Self::SquareMeter, Self::Rai, Self::Hectare, Self::Acre];

    /// Returns the zero-based index of this unit (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the display name, e.g. `"m²"`.
    pub fn name(self) -> &'static str {
        UNIT_TABLE[self.as_index()].0
    }

    /// Returns the multiplier converting an area in this unit to m².
    pub fn multiplier_m2(self) -> f64 {
        UNIT_TABLE[self.as_index()].1
    }

    /// Parses an area unit from a user-supplied name, case-insensitively.
    ///
    /// Accepts the ASCII aliases `"m2"` and `"sqm"` for m² and `"ha"` for
    /// hectare.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownUnit`] if the name matches no unit.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        match s.trim().to_lowercase().as_str() {
            "m²" | "m2" | "sqm" => Ok(Self::SquareMeter),
            "rai" => Ok(Self::Rai),
            "hectare" | "ha" => Ok(Self::Hectare),
            "acre" => Ok(Self::Acre),
            _ => Err(CatalogError::UnknownUnit {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers() {
        assert_eq!(AreaUnit::SquareMeter.multiplier_m2(), 1.0);
        assert_eq!(AreaUnit::Rai.multiplier_m2(), 1600.0);
        assert_eq!(AreaUnit::Hectare.multiplier_m2(), 10000.0);
        assert_eq!(AreaUnit::Acre.multiplier_m2(), 4046.86);
    }

    #[test]
    fn default_is_square_meter() {
        assert_eq!(AreaUnit::default(), AreaUnit::SquareMeter);
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!(AreaUnit::parse("m²").unwrap(), AreaUnit::SquareMeter);
        assert_eq!(AreaUnit::parse("m2").unwrap(), AreaUnit::SquareMeter);
        assert_eq!(AreaUnit::parse("SQM").unwrap(), AreaUnit::SquareMeter);
        assert_eq!(AreaUnit::parse("rai").unwrap(), AreaUnit::Rai);
        assert_eq!(AreaUnit::parse("Hectare").unwrap(), AreaUnit::Hectare);
        assert_eq!(AreaUnit::parse("ha").unwrap(), AreaUnit::Hectare);
        assert_eq!(AreaUnit::parse("Acre").unwrap(), AreaUnit::Acre);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            AreaUnit::parse("furlong").unwrap_err(),
            CatalogError::UnknownUnit {
                name: "furlong".to_string(),
            }
        );
    }

    #[test]
    fn parse_roundtrip_all() {
        for unit in AreaUnit::ALL {
            assert_eq!(AreaUnit::parse(unit.name()).unwrap(), unit);
        }
    }

    #[test]
    fn as_index_matches_all_order() {
        for (i, unit) in AreaUnit::ALL.iter().enumerate() {
            assert_eq!(unit.as_index(), i);
        }
    }
}
