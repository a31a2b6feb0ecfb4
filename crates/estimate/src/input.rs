//! Calculation input: the full set of user parameters for one estimate.

use tethys_catalog::{AreaUnit, City, Currency, Method};

use crate::error::EstimateError;

/// All parameters of a single calculation request.
///
/// Use the builder methods to customise fields, then [`validate`] (or let
/// [`estimate_costs`](crate::estimate_costs) do it) before computing.
///
/// # Example
///
/// ```
/// use tethys_catalog::{AreaUnit, City, Currency, Method};
/// use tethys_estimate::CalculationInput;
///
/// let input = CalculationInput::default()
///     .with_area(2.5, AreaUnit::Hectare)
///     .with_city(City::Dubai)
///     .with_years(10)
///     .with_currency(Currency::Aed)
///     .with_methods(Method::Truck, Method::EtBased);
///
/// assert!(input.validate().is_ok());
/// ```
///
/// [`validate`]: CalculationInput::validate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    /// Site area in `unit`s.
    area: f64,
    /// Unit the area is expressed in.
    unit: AreaUnit,
    /// City supplying ET0 and the cost coefficient.
    city: City,
    /// Planning horizon in years.
    years: u32,
    /// Display currency for all monetary outputs.
    currency: Currency,
    /// Water unit price per m³, in the display currency.
    water_price: f64,
    /// The incumbent method being compared against.
    base_method: Method,
    /// The candidate replacement method.
    comparison_method: Method,
}

impl CalculationInput {
    /// Sets the site area and its unit.
    pub fn with_area(mut self, area: f64, unit: AreaUnit) -> Self {
        self.area = area;
        self.unit = unit;
        self
    }

    /// Sets the city.
    pub fn with_city(mut self, city: City) -> Self {
        self.city = city;
        self
    }

    /// Sets the planning horizon in years.
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Sets the display currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the water unit price per m³ in the display currency.
    pub fn with_water_price(mut self, price: f64) -> Self {
        self.water_price = price;
        self
    }

    /// Sets the base and comparison methods.
    pub fn with_methods(mut self, base: Method, comparison: Method) -> Self {
        self.base_method = base;
        self.comparison_method = comparison;
        self
    }

    /// Returns the site area in `unit`s.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Returns the unit the area is expressed in.
    pub fn unit(&self) -> AreaUnit {
        self.unit
    }

    /// Returns the city.
    pub fn city(&self) -> City {
        self.city
    }

    /// Returns the planning horizon in years.
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Returns the display currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the water unit price per m³.
    pub fn water_price(&self) -> f64 {
        self.water_price
    }

    /// Returns the base method.
    pub fn base_method(&self) -> Method {
        self.base_method
    }

    /// Returns the comparison method.
    pub fn comparison_method(&self) -> Method {
        self.comparison_method
    }

    /// Returns the site area converted to m².
    pub fn area_m2(&self) -> f64 {
        self.area * self.unit.multiplier_m2()
    }

    /// Validates this input.
    ///
    /// Zero area and zero water price are allowed (all volumes and
    /// operating costs come out zero); negative or non-finite values are
    /// not, and neither is a zero-year horizon.
    pub fn validate(&self) -> Result<(), EstimateError> {
        if !self.area.is_finite() || self.area < 0.0 {
            return Err(EstimateError::InvalidArea { area: self.area });
        }
        if self.years < 1 {
            return Err(EstimateError::InvalidYears { years: self.years });
        }
        if !self.water_price.is_finite() || self.water_price < 0.0 {
            return Err(EstimateError::InvalidPrice {
                price: self.water_price,
            });
        }
        Ok(())
    }
}

impl Default for CalculationInput {
    /// The original dashboard defaults: 1600 m² in Bangkok over 5 years,
    /// priced in USD at 10.5 per m³, Manual compared against Auto.
    fn default() -> Self {
        Self {
            area: 1600.0,
            unit: AreaUnit::SquareMeter,
            city: City::Bangkok,
            years: 5,
            currency: Currency::Usd,
            water_price: 10.5,
            base_method: Method::Manual,
            comparison_method: Method::Auto,
        }
    }
}
