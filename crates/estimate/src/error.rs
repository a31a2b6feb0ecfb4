//! Estimation error types.

/// Errors that can occur when validating a calculation input.
///
/// All variants are invalid-input conditions; the engines themselves have
/// no failure modes once validation has passed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// The site area is negative or not a finite number.
    #[error("invalid area: {area} (must be finite and >= 0)")]
    InvalidArea {
        /// The rejected area value.
        area: f64,
    },

    /// The planning horizon is zero years.
    #[error("invalid horizon: {years} years (must be >= 1)")]
    InvalidYears {
        /// The rejected year count.
        years: u32,
    },

    /// The water unit price is negative or not a finite number.
    #[error("invalid water price: {price} (must be finite and >= 0)")]
    InvalidPrice {
        /// The rejected price value.
        price: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_area() {
        let err = EstimateError::InvalidArea { area: -3.5 };
        assert_eq!(err.to_string(), "invalid area: -3.5 (must be finite and >= 0)");
    }

    #[test]
    fn error_invalid_years() {
        let err = EstimateError::InvalidYears { years: 0 };
        assert_eq!(err.to_string(), "invalid horizon: 0 years (must be >= 1)");
    }

    #[test]
    fn error_invalid_price() {
        let err = EstimateError::InvalidPrice { price: -0.1 };
        assert_eq!(
            err.to_string(),
            "invalid water price: -0.1 (must be finite and >= 0)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EstimateError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EstimateError>();
    }
}
