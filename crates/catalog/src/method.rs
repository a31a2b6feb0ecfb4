//! Irrigation methods: usage multipliers and capital-cost baselines.

use crate::error::CatalogError;

/// The four irrigation methods the estimator compares.
///
/// Each method has a usage multiplier — the factor applied to the
/// ET-derived reference water volume to get the method's actual annual
/// consumption — and a base capital cost in THB per reference area
/// (one rai, 1600 m²). Manual and truck irrigation overshoot the
/// reference demand heavily; an ET-based controller tracks it exactly by
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Method {
    /// Hose-and-worker watering.
    Manual = 0,
    /// Water delivered by tanker truck.
    Truck = 1,
    /// Conventional automatic sprinkler system on a fixed timer.
    Auto = 2,
    /// Automatic system driven by an evapotranspiration controller.
    EtBased = 3,
}

/// Per-method data: `(display name, usage multiplier, base capital THB)`.
#[rustfmt::skip]
const METHOD_TABLE: [(&str, f64, f64); 4] = [
    ("Manual",   6.0,  613006.0),
    ("Truck",    8.0, 2160000.0),
    ("Auto",     1.3,  280901.4),
    ("ET-Based", 1.0,  280901.4),
];

impl Method {
    /// All methods in table order.
    pub const ALL: [Method; 4] = [Self::Manual, Self::Truck, Self::Auto, Self::EtBased];

    /// Returns the zero-based index of this method (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the display name, e.g. `"ET-Based"`.
    pub fn name(self) -> &'static str {
        METHOD_TABLE[self.as_index()].0
    }

    /// Returns the factor applied to the ET-derived reference volume to
    /// get this method's annual water usage.
    pub fn usage_multiplier(self) -> f64 {
        METHOD_TABLE[self.as_index()].1
    }

    /// Returns the base capital cost in THB per reference area (one rai).
    pub fn base_capital_thb(self) -> f64 {
        METHOD_TABLE[self.as_index()].2
    }

    /// Parses a method from a user-supplied name, case-insensitively.
    ///
    /// Accepts `"automatic"` for Auto and `"et"` / `"etbased"` for
    /// ET-Based.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownMethod`] if the name matches no
    /// method.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "truck" => Ok(Self::Truck),
            "auto" | "automatic" => Ok(Self::Auto),
            "et-based" | "etbased" | "et based" | "et" => Ok(Self::EtBased),
            _ => Err(CatalogError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
