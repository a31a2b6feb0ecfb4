//! The comparison engine: savings, payback and CO2 between two methods.

use tracing::debug;

use tethys_catalog::Method;

use crate::result::CostBreakdown;

/// Fixed emission factor: tons of CO2 per m³ of water-usage delta.
///
/// Covers pumping energy and treatment for the delivered water.
pub const EMISSION_FACTOR_T_PER_M3: f64 = 0.5;

/// Derived savings metrics between a base and a comparison method.
///
/// Produced by [`compare`]. When base and comparison are the same method,
/// all savings are exactly zero and payback is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    base: Method,
    comparison: Method,
    annual_savings: f64,
    total_savings: f64,
    capex_difference: f64,
    payback_years: Option<f64>,
    co2_savings_t: f64,
}

impl Comparison {
    /// Returns the base (incumbent) method.
    pub fn base(&self) -> Method {
        self.base
    }

    /// Returns the comparison (candidate) method.
    pub fn comparison(&self) -> Method {
        self.comparison
    }

    /// Returns the annual operating-expense savings of switching.
    pub fn annual_savings(&self) -> f64 {
        self.annual_savings
    }

    /// Returns the operating-expense savings over the full horizon.
    pub fn total_savings(&self) -> f64 {
        self.total_savings
    }

    /// Returns the capital-cost difference, base minus comparison.
    pub fn capex_difference(&self) -> f64 {
        self.capex_difference
    }

    /// Returns the payback period in years.
    ///
    /// Defined only when annual savings and the capital-cost difference
    /// are both positive; `None` otherwise (the switch either never pays
    /// back or pays back immediately).
    pub fn payback_years(&self) -> Option<f64> {
        self.payback_years
    }

    /// Returns the CO2 savings over the full horizon, in tons.
    pub fn co2_savings_t(&self) -> f64 {
        self.co2_savings_t
    }
}

/// Runs the comparison engine over a cost breakdown.
///
/// Pure arithmetic on the breakdown's figures; no failure modes. Savings
/// are zero by definition when `base == comparison`.
pub fn compare(breakdown: &CostBreakdown, base: Method, comparison: Method) -> Comparison {
    let years = f64::from(breakdown.years());

    if base == comparison {
        debug!(method = base.name(), "comparison against itself, all savings zero");
        return Comparison {
            base,
            comparison,
            annual_savings: 0.0,
            total_savings: 0.0,
            capex_difference: 0.0,
            payback_years: None,
            co2_savings_t: 0.0,
        };
    }

    let from = breakdown.for_method(base);
    let to = breakdown.for_method(comparison);

    let annual_savings = from.annual_opex() - to.annual_opex();
    let capex_difference = from.capital_cost() - to.capital_cost();
    let payback_years = if annual_savings > 0.0 && capex_difference > 0.0 {
        Some(capex_difference / annual_savings)
    } else {
        None
    };
    let co2_savings_t =
        (from.annual_usage_m3() - to.annual_usage_m3()) * years * EMISSION_FACTOR_T_PER_M3;

    Comparison {
        base,
        comparison,
        annual_savings,
        total_savings: annual_savings * years,
        capex_difference,
        payback_years,
        co2_savings_t,
    }
}
