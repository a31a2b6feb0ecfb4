//! City reference data: annual evapotranspiration and construction-cost
//! coefficients.

use crate::error::CatalogError;

/// The 23 cities supported by the estimator.
///
/// Each city carries two pieces of reference data: the annual reference
/// evapotranspiration ET0 (mm/year), which drives water volume estimates,
/// and a dimensionless construction-cost coefficient that scales capital
/// costs relative to Bangkok (1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum City {
    Bangkok = 0,
    Jakarta = 1,
    KualaLumpur = 2,
    Manila = 3,
    Singapore = 4,
    Hanoi = 5,
    HoChiMinhCity = 6,
    Tokyo = 7,
    Seoul = 8,
    Dubai = 9,
    MexicoCity = 10,
    SaoPaulo = 11,
    BuenosAires = 12,
    Beijing = 13,
    Shanghai = 14,
    Guangzhou = 15,
    Shenzhen = 16,
    Chengdu = 17,
    Wuhan = 18,
    Xian = 19,
    Hangzhou = 20,
    Nanjing = 21,
    Tianjin = 22,
}

/// Per-city reference data: `(display name, ET0 mm/year, cost coefficient)`.
///
/// Indexed by the `#[repr(u8)]` discriminant. ET0 values are long-term
/// annual estimates; coefficients approximate relative construction cost
/// with Bangkok as the 1.0 baseline.
#[rustfmt::skip]
const CITY_TABLE: [(&str, f64, f64); 23] = [
    ("Bangkok",          1280.0, 1.0),
    ("Jakarta",          1135.0, 0.9),
    ("Kuala Lumpur",     1300.0, 1.1),
    ("Manila",           1370.0, 1.3),
    ("Singapore",        1200.0, 1.6),
    ("Hanoi",            1300.0, 0.8),
    ("Ho Chi Minh City", 1500.0, 1.0),
    ("Tokyo",            1100.0, 2.2),
    ("Seoul",            1050.0, 1.8),
    ("Dubai",            2100.0, 2.5),
    ("Mexico City",       950.0, 0.9),
    ("São Paulo",        1250.0, 1.2),
    ("Buenos Aires",     1000.0, 0.9),
    ("Beijing",           980.0, 1.6),
    ("Shanghai",         1050.0, 1.7),
    ("Guangzhou",        1150.0, 1.5),
    ("Shenzhen",         1200.0, 1.5),
    ("Chengdu",          1000.0, 1.3),
    ("Wuhan",            1020.0, 1.2),
    ("Xi'an",             970.0, 1.1),
    ("Hangzhou",         1100.0, 1.5),
    ("Nanjing",          1080.0, 1.4),
    ("Tianjin",           990.0, 1.3),
];

impl City {
    /// All cities in table order.
    pub const ALL: [City; 23] = [
        Self::Bangkok,
        Self::Jakarta,
        Self::KualaLumpur,
        Self::Manila,
        Self::Singapore,
        Self::Hanoi,
        Self::HoChiMinhCity,
        Self::Tokyo,
        Self::Seoul,
        Self::Dubai,
        Self::MexicoCity,
        Self::SaoPaulo,
        Self::BuenosAires,
        Self::Beijing,
        Self::Shanghai,
        Self::Guangzhou,
        Self::Shenzhen,
        Self::Chengdu,
        Self::Wuhan,
        Self::Xian,
        Self::Hangzhou,
        Self::Nanjing,
        Self::Tianjin,
    ];

    /// Returns the zero-based index of this city (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the canonical display name, e.g. `"Ho Chi Minh City"`.
    pub fn name(self) -> &'static str {
        CITY_TABLE[self.as_index()].0
    }

    /// Returns the annual reference evapotranspiration ET0 in mm/year.
    pub fn et0_mm(self) -> f64 {
        CITY_TABLE[self.as_index()].1
    }

    /// Returns the construction-cost coefficient (Bangkok = 1.0).
    pub fn coefficient(self) -> f64 {
        CITY_TABLE[self.as_index()].2
    }

    /// Parses a city from a user-supplied name, case-insensitively.
    ///
    /// ASCII spellings of the two non-ASCII names are accepted
    /// (`"Sao Paulo"`, `"Xian"`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCity`] if the name matches no city.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().to_lowercase() == needle)
            .or(match needle.as_str() {
                "sao paulo" => Some(Self::SaoPaulo),
                "xian" => Some(Self::Xian),
                _ => None,
            })
            .ok_or_else(|| CatalogError::UnknownCity {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
