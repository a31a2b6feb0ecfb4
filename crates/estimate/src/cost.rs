//! The cost engine: per-method water usage, capital and operating costs.

use tracing::debug;

use tethys_catalog::Method;

use crate::error::EstimateError;
use crate::input::CalculationInput;
use crate::result::{CostBreakdown, MethodEstimate};

/// Normalization area for the capital-cost baselines, in m² (one rai).
///
/// Must stay equal to `AreaUnit::Rai.multiplier_m2()`; the base capital
/// figures in the method table are quoted per rai.
pub const REFERENCE_AREA_M2: f64 = 1600.0;

/// Labor share of the operating-expense rate.
pub const LABOR_COST_SHARE: f64 = 0.4;
/// Electricity share of the operating-expense rate.
pub const ELECTRICITY_COST_SHARE: f64 = 0.3;
/// Water share of the operating-expense rate.
pub const WATER_COST_SHARE: f64 = 0.3;

/// Combined operating-expense rate applied to `usage * water_price`.
///
/// The three shares sum to 1.0, so the combined rate is the water price
/// itself; they are kept separate because the source model prices labor
/// and electricity as fractions of the water bill.
pub const OPEX_RATE: f64 = LABOR_COST_SHARE + ELECTRICITY_COST_SHARE + WATER_COST_SHARE;

/// Runs the cost engine over a calculation input.
///
/// Validates the input, converts the area to m², derives the annual
/// ET reference volume, and produces a [`MethodEstimate`] for each of the
/// four methods:
///
/// - annual usage = `et_volume * usage_multiplier`
/// - capital = `base_capital * (area_m2 / reference_area) * rate * city_coefficient`
/// - annual opex = `annual_usage * water_price * OPEX_RATE`
/// - totals over the horizon, with `total_cost = capital + total_opex`
///
/// # Errors
///
/// Returns [`EstimateError`] if the input fails validation. The engine
/// itself cannot fail on validated input.
pub fn estimate_costs(input: &CalculationInput) -> Result<CostBreakdown, EstimateError> {
    input.validate()?;

    let area_m2 = input.area_m2();
    let et_volume_m3 = input.city().et0_mm() * area_m2 / 1000.0;
    let years = f64::from(input.years());

    debug!(
        city = input.city().name(),
        area_m2,
        et_volume_m3,
        "cost engine input resolved"
    );

    let capital_scale =
        (area_m2 / REFERENCE_AREA_M2) * input.currency().rate() * input.city().coefficient();

    let estimates = Method::ALL.map(|method| {
        let annual_usage = et_volume_m3 * method.usage_multiplier();
        let capital = method.base_capital_thb() * capital_scale;
        let annual_opex = annual_usage * input.water_price() * OPEX_RATE;
        let total_opex = annual_opex * years;
        MethodEstimate::new(
            method,
            annual_usage,
            annual_usage * years,
            capital,
            annual_opex,
            total_opex,
            capital + total_opex,
        )
    });

    Ok(CostBreakdown::new(
        area_m2,
        et_volume_m3,
        input.years(),
        estimates,
    ))
}
