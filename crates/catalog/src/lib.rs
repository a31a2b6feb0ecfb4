//! # tethys-catalog
//!
//! Compiled-in reference data for the irrigation estimator: cities with
//! their annual reference evapotranspiration and construction-cost
//! coefficients, area units, currencies with fallback exchange rates, and
//! the four irrigation methods.
//!
//! All of it is static. Each category is an enum with an associated const
//! table, so lookups are array indexing and unknown names can only occur
//! at the string boundary (`parse`), never past it.
//!
//! ## Quick Start
//!
//! ```
//! use tethys_catalog::{AreaUnit, City, Currency, Method};
//!
//! let city = City::parse("bangkok").unwrap();
//! assert_eq!(city.et0_mm(), 1280.0);
//! assert_eq!(city.coefficient(), 1.0);
//!
//! let unit = AreaUnit::parse("rai").unwrap();
//! assert_eq!(unit.multiplier_m2(), 1600.0);
//!
//! assert_eq!(Currency::parse("usd").unwrap().rate(), 0.029);
//! assert_eq!(Method::parse("et-based").unwrap(), Method::EtBased);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `city` | 23 cities: name, ET0 (mm/year), cost coefficient |
//! | `unit` | Area units and their multipliers to m² |
//! | `currency` | Currency codes and fallback rates against the THB base |
//! | `method` | Irrigation methods: usage multiplier, base capital cost |
//! | `error` | Error types |

mod city;
mod currency;
mod error;
mod method;
mod unit;

pub use city::City;
pub use currency::Currency;
pub use error::CatalogError;
pub use method::Method;
pub use unit::AreaUnit;
