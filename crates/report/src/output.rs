//! JSON output structures for the report document.
//!
//! Numbers are rounded to 2 decimals before serialization, matching the
//! text report; method, city, currency and unit names are the canonical
//! catalog spellings regardless of the report language.

use serde::Serialize;

use tethys_estimate::{CalculationInput, Comparison, CostBreakdown};

use crate::context::ReportContext;
use crate::error::ReportError;
use crate::format::round2;

/// Top-level report document.
#[derive(Debug, Serialize)]
pub struct ReportDocument {
    /// Project name from the context (or the default).
    pub project: String,
    /// ISO code of the report language.
    pub language: String,
    /// Echo of the resolved inputs.
    pub input: InputEcho,
    /// One entry per irrigation method, in table order.
    pub methods: Vec<MethodRow>,
    /// Base-versus-comparison metrics.
    pub comparison: ComparisonSummary,
}

/// Echo of the inputs the estimate was computed from.
#[derive(Debug, Serialize)]
pub struct InputEcho {
    pub city: String,
    pub area: f64,
    pub unit: String,
    pub area_m2: f64,
    pub years: u32,
    pub currency: String,
    pub water_price: f64,
    pub et0_mm: f64,
    pub construction_coefficient: f64,
    pub et_volume_m3: f64,
}

/// Per-method cost, water and CO2 figures.
#[derive(Debug, Clone, Serialize)]
pub struct MethodRow {
    pub method: String,
    pub capital_cost: f64,
    pub annual_opex: f64,
    pub annual_usage_m3: f64,
    pub annual_co2_t: f64,
    pub total_cost: f64,
}

/// Comparison metrics between the base and comparison methods.
#[derive(Debug, Serialize)]
pub struct ComparisonSummary {
    pub base_method: String,
    pub comparison_method: String,
    pub annual_savings: f64,
    pub total_savings: f64,
    pub capex_difference: f64,
    /// `null` when the comparison has no capital premium to recover.
    pub payback_years: Option<f64>,
    pub co2_savings_t: f64,
}

impl ReportDocument {
    /// Builds the document from an estimate and its comparison.
    pub fn build(
        input: &CalculationInput,
        breakdown: &CostBreakdown,
        comparison: &Comparison,
        ctx: &ReportContext,
    ) -> Self {
        let city = input.city();
        let methods = breakdown
            .estimates()
            .iter()
            .map(|est| MethodRow {
                method: est.method().name().to_string(),
                capital_cost: round2(est.capital_cost()),
                annual_opex: round2(est.annual_opex()),
                annual_usage_m3: round2(est.annual_usage_m3()),
                annual_co2_t: round2(est.annual_co2_t()),
                total_cost: round2(est.total_cost()),
            })
            .collect();

        ReportDocument {
            project: ctx.project().to_string(),
            language: ctx.language().code().to_string(),
            input: InputEcho {
                city: city.name().to_string(),
                area: round2(input.area()),
                unit: input.unit().name().to_string(),
                area_m2: round2(input.area_m2()),
                years: input.years(),
                currency: input.currency().code().to_string(),
                water_price: round2(input.water_price()),
                et0_mm: city.et0_mm(),
                construction_coefficient: city.coefficient(),
                et_volume_m3: round2(breakdown.et_volume_m3()),
            },
            methods,
            comparison: ComparisonSummary {
                base_method: comparison.base().name().to_string(),
                comparison_method: comparison.comparison().name().to_string(),
                annual_savings: round2(comparison.annual_savings()),
                total_savings: round2(comparison.total_savings()),
                capex_difference: round2(comparison.capex_difference()),
                payback_years: comparison.payback_years().map(round2),
                co2_savings_t: round2(comparison.co2_savings_t()),
            },
        }
    }
}

/// Serializes a report document to a pretty JSON string.
pub fn to_json(document: &ReportDocument) -> Result<String, ReportError> {
    serde_json::to_string_pretty(document).map_err(|e| ReportError::Serialization {
        reason: e.to_string(),
    })
}
