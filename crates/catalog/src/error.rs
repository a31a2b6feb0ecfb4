//! Error types for the tethys-catalog crate.

/// Error type for all fallible operations in the tethys-catalog crate.
///
/// Every variant corresponds to a user-supplied name that does not match
/// any catalog entry. The offending input is carried verbatim so the
/// caller can echo it back.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Returned when a city name matches none of the 23 known cities.
    #[error("unknown city: {name:?}")]
    UnknownCity {
        /// The city name that was provided.
        name: String,
    },

    /// Returned when an area unit name matches no known unit.
    #[error("unknown area unit: {name:?} (expected m², Rai, Hectare or Acre)")]
    UnknownUnit {
        /// The unit name that was provided.
        name: String,
    },

    /// Returned when a currency code matches no known currency.
    #[error("unknown currency: {code:?}")]
    UnknownCurrency {
        /// The currency code that was provided.
        code: String,
    },

    /// Returned when an irrigation method name matches no known method.
    #[error("unknown irrigation method: {name:?} (expected Manual, Truck, Auto or ET-Based)")]
    UnknownMethod {
        /// The method name that was provided.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_city() {
        let err = CatalogError::UnknownCity {
            name: "Atlantis".to_string(),
        };
        assert_eq!(err.to_string(), "unknown city: \"Atlantis\"");
    }

    #[test]
    fn error_unknown_unit() {
        let err = CatalogError::UnknownUnit {
            name: "furlong".to_string(),
        };
        assert!(err.to_string().contains("unknown area unit"));
        assert!(err.to_string().contains("furlong"));
    }

    #[test]
    fn error_unknown_currency() {
        let err = CatalogError::UnknownCurrency {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "unknown currency: \"XYZ\"");
    }

    #[test]
    fn error_unknown_method() {
        let err = CatalogError::UnknownMethod {
            name: "Sprinkler".to_string(),
        };
        assert!(err.to_string().contains("unknown irrigation method"));
        assert!(err.to_string().contains("Sprinkler"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CatalogError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CatalogError>();
    }
}
