//! Pure conversion functions: TOML config structs + CLI flags -> engine input.

use anyhow::Result;

use tethys_catalog::{AreaUnit, City, Currency, Method};
use tethys_estimate::CalculationInput;
use tethys_locale::Language;

use crate::cli::EstimateArgs;
use crate::config::TethysConfig;

/// Builds the engine input from the config file merged with CLI flags.
///
/// Flags win over the config file; config fields win over the built-in
/// defaults (already applied during deserialization). Name lookups go
/// through the catalog parsers, so an unknown city, unit, currency or
/// method surfaces as a typed error naming the offending input.
pub fn build_input(config: &TethysConfig, args: &EstimateArgs) -> Result<CalculationInput> {
    let city = City::parse(args.city.as_deref().unwrap_or(&config.site.city))?;
    let unit = AreaUnit::parse(args.unit.as_deref().unwrap_or(&config.site.unit))?;
    let currency = Currency::parse(args.currency.as_deref().unwrap_or(&config.plan.currency))?;
    let base = Method::parse(args.base.as_deref().unwrap_or(&config.methods.base))?;
    let comparison = Method::parse(
        args.comparison
            .as_deref()
            .unwrap_or(&config.methods.comparison),
    )?;

    Ok(CalculationInput::default()
        .with_area(args.area.unwrap_or(config.site.area), unit)
        .with_city(city)
        .with_years(args.years.unwrap_or(config.plan.years))
        .with_currency(currency)
        .with_water_price(args.water_price.unwrap_or(config.plan.water_price))
        .with_methods(base, comparison))
}

/// Resolves the report language from the flag or the config file.
pub fn build_language(config: &TethysConfig, lang_flag: Option<&str>) -> Result<Language> {
    Ok(Language::parse(
        lang_flag.unwrap_or(&config.report.language),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn no_flags() -> EstimateArgs {
        EstimateArgs {
            config: PathBuf::from("tethys.toml"),
            area: None,
            unit: None,
            city: None,
            years: None,
            currency: None,
            water_price: None,
            base: None,
            comparison: None,
            project: None,
            lang: None,
            json: None,
            no_charts: false,
        }
    }

    fn file_config() -> TethysConfig {
        toml::from_str(
            r#"
            [site]
            city = "Tokyo"
            area = 2.0
            unit = "rai"

            [plan]
            years = 12
            currency = "VND"
            water_price = 4.0

            [methods]
            base = "Truck"
            comparison = "ET-Based"

            [report]
            language = "th"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn config_fields_apply_when_flags_are_absent() {
        let input = build_input(&file_config(), &no_flags()).unwrap();
        assert_eq!(input.city(), City::Tokyo);
        assert_eq!(input.area(), 2.0);
        assert_eq!(input.unit(), AreaUnit::Rai);
        assert_eq!(input.years(), 12);
        assert_eq!(input.currency(), Currency::Vnd);
        assert_eq!(input.water_price(), 4.0);
        assert_eq!(input.base_method(), Method::Truck);
        assert_eq!(input.comparison_method(), Method::EtBased);
    }

    #[test]
    fn every_flag_overrides_its_config_field() {
        let args = EstimateArgs {
            area: Some(3.0),
            unit: Some("hectare".to_string()),
            city: Some("Seoul".to_string()),
            years: Some(7),
            currency: Some("JPY".to_string()),
            water_price: Some(8.25),
            base: Some("Auto".to_string()),
            comparison: Some("Manual".to_string()),
            ..no_flags()
        };
        let input = build_input(&file_config(), &args).unwrap();
        assert_eq!(input.city(), City::Seoul);
        assert_eq!(input.area(), 3.0);
        assert_eq!(input.unit(), AreaUnit::Hectare);
        assert_eq!(input.years(), 7);
        assert_eq!(input.currency(), Currency::Jpy);
        assert_eq!(input.water_price(), 8.25);
        assert_eq!(input.base_method(), Method::Auto);
        assert_eq!(input.comparison_method(), Method::Manual);
    }

    #[test]
    fn precedence_is_per_field() {
        // One flag set; everything else still resolves from the file.
        let args = EstimateArgs {
            years: Some(1),
            ..no_flags()
        };
        let input = build_input(&file_config(), &args).unwrap();
        assert_eq!(input.years(), 1);
        assert_eq!(input.city(), City::Tokyo);
        assert_eq!(input.currency(), Currency::Vnd);
        assert_eq!(input.base_method(), Method::Truck);
        assert_eq!(input.comparison_method(), Method::EtBased);
    }

    #[test]
    fn defaults_reach_the_engine_when_file_and_flags_are_silent() {
        let input = build_input(&TethysConfig::default(), &no_flags()).unwrap();
        assert_eq!(input, CalculationInput::default());
    }

    #[test]
    fn unknown_names_surface_as_catalog_errors() {
        let args = EstimateArgs {
            city: Some("Atlantis".to_string()),
            ..no_flags()
        };
        let err = build_input(&TethysConfig::default(), &args).unwrap_err();
        assert!(err.to_string().contains("unknown city"));

        let args = EstimateArgs {
            unit: Some("furlong".to_string()),
            ..no_flags()
        };
        let err = build_input(&TethysConfig::default(), &args).unwrap_err();
        assert!(err.to_string().contains("unknown area unit"));
    }

    #[test]
    fn language_flag_wins_over_config() {
        let config = file_config();
        assert_eq!(
            build_language(&config, Some("es")).unwrap(),
            Language::Spanish
        );
        assert_eq!(build_language(&config, None).unwrap(), Language::Thai);
        assert_eq!(
            build_language(&TethysConfig::default(), None).unwrap(),
            Language::English
        );
        assert!(build_language(&config, Some("klingon")).is_err());
    }
}
