use approx::assert_abs_diff_eq;

use tethys_catalog::{AreaUnit, City, Currency, Method};
use tethys_estimate::{compare, estimate_costs, CalculationInput, EstimateError};

/// The worked reference case from the product sheet: 1600 m² in Bangkok
/// over 5 years, water at 10.5 USD/m³, Manual vs Auto.
#[test]
fn bangkok_reference_case_end_to_end() {
    let input = CalculationInput::default();
    let breakdown = estimate_costs(&input).unwrap();

    assert_eq!(breakdown.et_volume_m3(), 2048.0);

    let manual = breakdown.for_method(Method::Manual);
    let auto = breakdown.for_method(Method::Auto);

    assert_eq!(manual.annual_usage_m3(), 12288.0);
    assert_abs_diff_eq!(auto.annual_usage_m3(), 2662.4, epsilon = 1e-9);

    // Opex at the combined 1.0 rate is usage * price.
    assert_abs_diff_eq!(manual.annual_opex(), 129024.0, epsilon = 1e-6);
    assert_abs_diff_eq!(auto.annual_opex(), 27955.2, epsilon = 1e-6);

    // Capital at one rai, Bangkok coefficient 1.0, USD rate 0.029.
    assert_abs_diff_eq!(manual.capital_cost(), 17777.174, epsilon = 1e-6);
    assert_abs_diff_eq!(auto.capital_cost(), 8146.1406, epsilon = 1e-6);

    let cmp = compare(&breakdown, Method::Manual, Method::Auto);
    assert_abs_diff_eq!(cmp.annual_savings(), 101068.8, epsilon = 1e-6);
    assert_abs_diff_eq!(cmp.total_savings(), 505344.0, epsilon = 1e-6);
    assert_abs_diff_eq!(cmp.capex_difference(), 9631.0334, epsilon = 1e-6);
    assert_abs_diff_eq!(cmp.co2_savings_t(), 24064.0, epsilon = 1e-6);

    // Payback just over a month: 9631.0334 / 101068.8.
    let payback = cmp.payback_years().unwrap();
    assert_abs_diff_eq!(payback, 0.095291, epsilon = 1e-5);
}

#[test]
fn total_cost_identity_over_a_grid_of_inputs() {
    for years in [1_u32, 2, 5, 30] {
        for (area, unit) in [
            (1.0, AreaUnit::Rai),
            (0.25, AreaUnit::Hectare),
            (12345.6, AreaUnit::SquareMeter),
        ] {
            let input = CalculationInput::default()
                .with_area(area, unit)
                .with_years(years)
                .with_water_price(7.77);
            let b = estimate_costs(&input).unwrap();
            for est in b.estimates() {
                assert_eq!(
                    est.total_cost(),
                    est.capital_cost() + est.annual_opex() * f64::from(years),
                    "identity broke for {} at {area} {unit}, {years}y",
                    est.method()
                );
            }
        }
    }
}

#[test]
fn currency_change_scales_capital_and_nothing_else() {
    let thb = estimate_costs(&CalculationInput::default().with_currency(Currency::Thb)).unwrap();
    for currency in Currency::ALL {
        let other =
            estimate_costs(&CalculationInput::default().with_currency(currency)).unwrap();
        for method in Method::ALL {
            assert_abs_diff_eq!(
                other.for_method(method).capital_cost(),
                thb.for_method(method).capital_cost() * currency.rate(),
                epsilon = 1e-6
            );
            assert_eq!(
                other.for_method(method).annual_usage_m3(),
                thb.for_method(method).annual_usage_m3()
            );
            assert_eq!(
                other.for_method(method).annual_co2_t(),
                thb.for_method(method).annual_co2_t()
            );
        }

        let cmp_other = compare(&other, Method::Manual, Method::Auto);
        let cmp_thb = compare(&thb, Method::Manual, Method::Auto);
        assert_eq!(cmp_other.co2_savings_t(), cmp_thb.co2_savings_t());
    }
}

#[test]
fn usage_ranking_is_fixed_by_multipliers() {
    // Truck > Manual > Auto > ET-Based for any site with nonzero area.
    for city in City::ALL {
        let b = estimate_costs(&CalculationInput::default().with_city(city)).unwrap();
        let usage = |m: Method| b.for_method(m).annual_usage_m3();
        assert!(usage(Method::Truck) > usage(Method::Manual));
        assert!(usage(Method::Manual) > usage(Method::Auto));
        assert!(usage(Method::Auto) > usage(Method::EtBased));
    }
}

#[test]
fn every_city_produces_a_finite_breakdown() {
    for city in City::ALL {
        let input = CalculationInput::default().with_city(city);
        let b = estimate_costs(&input).unwrap();
        for est in b.estimates() {
            assert!(est.annual_usage_m3().is_finite());
            assert!(est.capital_cost().is_finite());
            assert!(est.total_cost().is_finite());
        }
    }
}

#[test]
fn payback_definedness_matrix() {
    // Across every ordered method pair, payback is Some exactly when
    // annual savings and capex difference are both positive.
    let b = estimate_costs(&CalculationInput::default()).unwrap();
    for base in Method::ALL {
        for comparison in Method::ALL {
            let cmp = compare(&b, base, comparison);
            let expect_defined = cmp.annual_savings() > 0.0 && cmp.capex_difference() > 0.0;
            assert_eq!(
                cmp.payback_years().is_some(),
                expect_defined,
                "payback definedness wrong for {base} -> {comparison}"
            );
        }
    }
}

#[test]
fn invalid_inputs_produce_no_partial_result() {
    let bad_area = CalculationInput::default().with_area(-5.0, AreaUnit::SquareMeter);
    assert!(matches!(
        estimate_costs(&bad_area),
        Err(EstimateError::InvalidArea { .. })
    ));

    let bad_years = CalculationInput::default().with_years(0);
    assert!(matches!(
        estimate_costs(&bad_years),
        Err(EstimateError::InvalidYears { years: 0 })
    ));

    let bad_price = CalculationInput::default().with_water_price(f64::NAN);
    assert!(matches!(
        estimate_costs(&bad_price),
        Err(EstimateError::InvalidPrice { .. })
    ));
}
