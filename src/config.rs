use serde::Deserialize;

/// Top-level tethys configuration.
///
/// Every field has a default matching the reference scenario (Bangkok,
/// 1600 m², 5 years, USD, Manual versus Auto), so an empty file and a
/// missing file behave the same.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TethysConfig {
    /// Project name shown in the report.
    #[serde(default)]
    pub project: Option<String>,

    /// Site settings: city, area, unit.
    #[serde(default)]
    pub site: SiteToml,

    /// Planning settings: horizon, currency, water price.
    #[serde(default)]
    pub plan: PlanToml,

    /// Method selection.
    #[serde(default)]
    pub methods: MethodsToml,

    /// Report settings.
    #[serde(default)]
    pub report: ReportToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteToml {
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_area")]
    pub area: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl Default for SiteToml {
    fn default() -> Self {
        Self {
            city: default_city(),
            area: default_area(),
            unit: default_unit(),
        }
    }
}

fn default_city() -> String {
    "Bangkok".to_string()
}
fn default_area() -> f64 {
    1600.0
}
fn default_unit() -> String {
    "m2".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanToml {
    #[serde(default = "default_years")]
    pub years: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_water_price")]
    pub water_price: f64,
}

impl Default for PlanToml {
    fn default() -> Self {
        Self {
            years: default_years(),
            currency: default_currency(),
            water_price: default_water_price(),
        }
    }
}

fn default_years() -> u32 {
    5
}
fn default_currency() -> String {
    "USD".to_string()
}
fn default_water_price() -> f64 {
    10.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodsToml {
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(default = "default_comparison")]
    pub comparison: String,
}

impl Default for MethodsToml {
    fn default() -> Self {
        Self {
            base: default_base(),
            comparison: default_comparison(),
        }
    }
}

fn default_base() -> String {
    "Manual".to_string()
}
fn default_comparison() -> String {
    "Auto".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_the_documented_defaults() {
        let config: TethysConfig = toml::from_str("").unwrap();
        assert_eq!(config.project, None);
        assert_eq!(config.site.city, "Bangkok");
        assert_eq!(config.site.area, 1600.0);
        assert_eq!(config.site.unit, "m2");
        assert_eq!(config.plan.years, 5);
        assert_eq!(config.plan.currency, "USD");
        assert_eq!(config.plan.water_price, 10.5);
        assert_eq!(config.methods.base, "Manual");
        assert_eq!(config.methods.comparison, "Auto");
        assert_eq!(config.report.language, "en");
    }

    #[test]
    fn default_matches_an_empty_document() {
        let parsed: TethysConfig = toml::from_str("").unwrap();
        let built = TethysConfig::default();
        assert_eq!(built.site.city, parsed.site.city);
        assert_eq!(built.site.area, parsed.site.area);
        assert_eq!(built.plan.water_price, parsed.plan.water_price);
        assert_eq!(built.methods.comparison, parsed.methods.comparison);
        assert_eq!(built.report.language, parsed.report.language);
    }

    #[test]
    fn full_document_parses_every_field() {
        let config: TethysConfig = toml::from_str(
            r#"
            project = "Riverside Resort"

            [site]
            city = "Hanoi"
            area = 2.5
            unit = "rai"

            [plan]
            years = 12
            currency = "VND"
            water_price = 6.0

            [methods]
            base = "Truck"
            comparison = "ET-Based"

            [report]
            language = "th"
            "#,
        )
        .unwrap();
        assert_eq!(config.project.as_deref(), Some("Riverside Resort"));
        assert_eq!(config.site.city, "Hanoi");
        assert_eq!(config.site.area, 2.5);
        assert_eq!(config.site.unit, "rai");
        assert_eq!(config.plan.years, 12);
        assert_eq!(config.plan.currency, "VND");
        assert_eq!(config.plan.water_price, 6.0);
        assert_eq!(config.methods.base, "Truck");
        assert_eq!(config.methods.comparison, "ET-Based");
        assert_eq!(config.report.language, "th");
    }

    #[test]
    fn partial_section_keeps_the_other_defaults() {
        let config: TethysConfig = toml::from_str("[plan]\nyears = 30\n").unwrap();
        assert_eq!(config.plan.years, 30);
        assert_eq!(config.plan.currency, "USD");
        assert_eq!(config.plan.water_price, 10.5);
        assert_eq!(config.site.city, "Bangkok");
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        assert!(toml::from_str::<TethysConfig>("water_price = 1.0\n").is_err());
    }

    #[test]
    fn unknown_section_key_is_rejected() {
        let doc = "[site]\ncity = \"Bangkok\"\nregion = \"TH\"\n";
        assert!(toml::from_str::<TethysConfig>(doc).is_err());
    }
}
