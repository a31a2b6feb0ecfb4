//! Currency codes and fallback exchange rates.

use crate::error::CatalogError;

/// The 12 supported display currencies.
///
/// Capital-cost baselines are quoted in Thai baht, so THB is the 1.0 base
/// and every other rate converts from THB. The rates are static fallback
/// constants; there is no live feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Currency {
    /// Thai baht (the base currency of the capital-cost tables).
    #[default]
    Thb = 0,
    /// US dollar.
    Usd = 1,
    /// Singapore dollar.
    Sgd = 2,
    /// Vietnamese dong.
    Vnd = 3,
    /// Indonesian rupiah.
    Idr = 4,
    /// Philippine peso.
    Php = 5,
    /// Mexican peso.
    Mxn = 6,
    /// Brazilian real.
    Brl = 7,
    /// Argentine peso.
    Ars = 8,
    /// Japanese yen.
    Jpy = 9,
    /// South Korean won.
    Krw = 10,
    /// UAE dirham.
    Aed = 11,
}

/// Per-currency data: `(ISO code, fallback rate per THB)`.
#[rustfmt::skip]
const CURRENCY_TABLE: [(&str, f64); 12] = [
    ("THB",   1.0),
    ("USD",   0.029),
    ("SGD",   0.038),
    ("VND", 735.0),
    ("IDR", 420.0),
    ("PHP",   1.5),
    ("MXN",   0.5),
    ("BRL",   0.19),
    ("ARS",  25.0),
    ("JPY",   4.5),
    ("KRW",  38.0),
    ("AED",   0.1),
];

impl Currency {
    /// All currencies in table order, THB base first.
    pub const ALL: [Currency; 12] = [
        Self::Thb,
        Self::Usd,
        Self::Sgd,
        Self::Vnd,
        Self::Idr,
        Self::Php,
        Self::Mxn,
        Self::Brl,
        Self::Ars,
        Self::Jpy,
        Self::Krw,
        Self::Aed,
    ];

    /// Returns the zero-based index of this currency (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the ISO 4217 code, e.g. `"USD"`.
    pub fn code(self) -> &'static str {
        CURRENCY_TABLE[self.as_index()].0
    }

    /// Returns the fallback exchange rate: units of this currency per THB.
    pub fn rate(self) -> f64 {
        CURRENCY_TABLE[self.as_index()].1
    }

    /// Parses a currency from its code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCurrency`] if the code matches no
    /// currency.
    pub fn parse(s: &str) -> Result<Self, CatalogError> {
        let needle = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code() == needle)
            .ok_or_else(|| CatalogError::UnknownCurrency {
                code: s.to_string(),
            })
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
