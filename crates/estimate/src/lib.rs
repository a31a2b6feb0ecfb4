//! # tethys-estimate
//!
//! The two engines of the irrigation estimator: the cost engine, which
//! turns a validated [`CalculationInput`] into per-method water usage and
//! cost figures, and the comparison engine, which derives savings, payback
//! and CO2 metrics between two selected methods.
//!
//! Everything here is pure arithmetic over the catalog's static tables.
//! Values are computed and stored in full f64 precision; rounding to
//! display precision is the presentation layer's job, which is what makes
//! `total_cost == capital + annual_opex * years` hold exactly.
//!
//! # Quick start
//!
//! ```
//! use tethys_catalog::Method;
//! use tethys_estimate::{CalculationInput, compare, estimate_costs};
//!
//! // Defaults: 1600 m² in Bangkok over 5 years, USD, Manual vs Auto.
//! let input = CalculationInput::default();
//! let breakdown = estimate_costs(&input).unwrap();
//! assert_eq!(breakdown.et_volume_m3(), 2048.0);
//!
//! let cmp = compare(&breakdown, Method::Manual, Method::Auto);
//! assert!(cmp.annual_savings() > 0.0);
//! assert_eq!(cmp.co2_savings_t(), 24064.0);
//! ```
//!
//! ```text
//! estimate_costs()
//!   ├─ input.validate()
//!   ├─ area → m², ET0 → m³/year     (cost.rs)
//!   └─ per method: usage, capital,
//!      opex, totals                 (cost.rs)
//! compare()
//!   └─ savings, payback, CO2        (compare.rs)
//! ```

pub mod compare;
pub mod cost;
pub mod error;
pub mod input;
pub mod result;

pub use compare::{compare, Comparison, EMISSION_FACTOR_T_PER_M3};
pub use cost::{estimate_costs, OPEX_RATE, REFERENCE_AREA_M2};
pub use error::EstimateError;
pub use input::CalculationInput;
pub use result::{CostBreakdown, MethodEstimate};
