//! Result types for the cost engine.

use tethys_catalog::Method;

use crate::compare::EMISSION_FACTOR_T_PER_M3;

/// Usage and cost figures for a single irrigation method.
///
/// All monetary fields are in the input's display currency; volumes are
/// in m³. Values are full-precision — rounding happens at presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodEstimate {
    method: Method,
    annual_usage_m3: f64,
    total_usage_m3: f64,
    capital_cost: f64,
    annual_opex: f64,
    total_opex: f64,
    total_cost: f64,
}

impl MethodEstimate {
    pub(crate) fn new(
        method: Method,
        annual_usage_m3: f64,
        total_usage_m3: f64,
        capital_cost: f64,
        annual_opex: f64,
        total_opex: f64,
        total_cost: f64,
    ) -> Self {
        Self {
            method,
            annual_usage_m3,
            total_usage_m3,
            capital_cost,
            annual_opex,
            total_opex,
            total_cost,
        }
    }

    /// Returns the method these figures belong to.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the annual water usage in m³/year.
    pub fn annual_usage_m3(&self) -> f64 {
        self.annual_usage_m3
    }

    /// Returns the water usage over the full horizon in m³.
    pub fn total_usage_m3(&self) -> f64 {
        self.total_usage_m3
    }

    /// Returns the one-time capital cost.
    pub fn capital_cost(&self) -> f64 {
        self.capital_cost
    }

    /// Returns the annual operating expense.
    pub fn annual_opex(&self) -> f64 {
        self.annual_opex
    }

    /// Returns the operating expense over the full horizon.
    pub fn total_opex(&self) -> f64 {
        self.total_opex
    }

    /// Returns the total cost: capital plus operating expense over the
    /// full horizon.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Returns the annual CO2 footprint in tons, derived from annual
    /// usage at the fixed emission factor.
    pub fn annual_co2_t(&self) -> f64 {
        self.annual_usage_m3 * EMISSION_FACTOR_T_PER_M3
    }
}

/// The cost engine's full output: one [`MethodEstimate`] per method plus
/// the intermediate site figures.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    /// Site area in m².
    area_m2: f64,
    /// ET-derived reference water volume in m³/year.
    et_volume_m3: f64,
    /// Planning horizon the totals were computed over.
    years: u32,
    /// Estimates in [`Method::ALL`] order.
    estimates: [MethodEstimate; 4],
}

impl CostBreakdown {
    pub(crate) fn new(
        area_m2: f64,
        et_volume_m3: f64,
        years: u32,
        estimates: [MethodEstimate; 4],
    ) -> Self {
        Self {
            area_m2,
            et_volume_m3,
            years,
            estimates,
        }
    }

    /// Returns the site area in m².
    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    /// Returns the ET-derived reference water volume in m³/year.
    pub fn et_volume_m3(&self) -> f64 {
        self.et_volume_m3
    }

    /// Returns the planning horizon in years.
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Returns the estimate for one method.
    pub fn for_method(&self, method: Method) -> &MethodEstimate {
        &self.estimates[method.as_index()]
    }

    /// Returns all four estimates in [`Method::ALL`] order.
    pub fn estimates(&self) -> &[MethodEstimate; 4] {
        &self.estimates
    }
}
