//! Catalog command: print the reference data behind the input choices.

use anyhow::Result;
use tracing::info_span;

use tethys_catalog::{AreaUnit, City, Currency, Method};
use tethys_locale::{label, Label, Language};
use tethys_report::format::format_amount;

use crate::cli::CatalogArgs;

/// Run the catalog listing.
pub fn run(args: CatalogArgs) -> Result<()> {
    let _cmd = info_span!("catalog").entered();
    let lang = match args.lang {
        Some(ref name) => Language::parse(name)?,
        None => Language::default(),
    };

    let mut out = String::new();

    out.push_str(&format!("-- {} --\n", label(lang, Label::InputCity)));
    let city_w = City::ALL
        .iter()
        .map(|c| c.name().chars().count())
        .max()
        .unwrap_or(0);
    for city in City::ALL {
        out.push_str(&format!(
            "  {:<city_w$}  {:>6.0} mm/year  coefficient {:.2}\n",
            city.name(),
            city.et0_mm(),
            city.coefficient()
        ));
    }
    out.push('\n');

    out.push_str(&format!("-- {} --\n", label(lang, Label::InputUnit)));
    for unit in AreaUnit::ALL {
        out.push_str(&format!(
            "  {:<8}  = {:>9.2} m²\n",
            unit.name(),
            unit.multiplier_m2()
        ));
    }
    out.push('\n');

    out.push_str(&format!("-- {} --\n", label(lang, Label::InputCurrency)));
    for currency in Currency::ALL {
        out.push_str(&format!(
            "  {:<4}  {:>8.4} per THB\n",
            currency.code(),
            currency.rate()
        ));
    }
    out.push('\n');

    out.push_str(&format!("-- {} --\n", label(lang, Label::TableMethod)));
    let method_w = Method::ALL
        .iter()
        .map(|m| m.name().chars().count())
        .max()
        .unwrap_or(0);
    for method in Method::ALL {
        out.push_str(&format!(
            "  {:<method_w$}  usage x{:<4.1}  capital {:>12} THB\n",
            method.name(),
            method.usage_multiplier(),
            format_amount(method.base_capital_thb())
        ));
    }

    print!("{out}");
    Ok(())
}
