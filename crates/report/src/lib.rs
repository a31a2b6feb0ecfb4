//! # tethys-report
//!
//! Presentation layer: renders a cost estimate and comparison as a
//! localized text dashboard (summary, method table, bar charts) and as
//! a JSON document.
//!
//! The engine computes at full precision; this crate is where values
//! are rounded (2 decimals, payback 1 decimal) and formatted.
//!
//! ## Quick Start
//!
//! ```
//! use tethys_estimate::{compare, estimate_costs, CalculationInput};
//! use tethys_report::{render_report, ReportContext};
//!
//! let input = CalculationInput::default();
//! let breakdown = estimate_costs(&input).unwrap();
//! let comparison = compare(&breakdown, input.base_method(), input.comparison_method());
//!
//! let text = render_report(&input, &breakdown, &comparison, &ReportContext::new());
//! assert!(text.contains("Irrigation Savings Calculator"));
//! assert!(text.contains("Savings & Sustainability Overview"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`render`] | Text dashboard assembly |
//! | [`chart`] | Unicode bar charts |
//! | [`output`] | JSON report document |
//! | [`format`] | Rounding and number formatting |
//! | [`context`] | Rendering options |
//! | [`error`] | Report error type |

pub mod chart;
pub mod context;
pub mod error;
pub mod format;
pub mod output;
pub mod render;

pub use chart::BarChart;
pub use context::{ReportContext, DEFAULT_PROJECT};
pub use error::ReportError;
pub use output::{to_json, ReportDocument};
pub use render::render_report;
