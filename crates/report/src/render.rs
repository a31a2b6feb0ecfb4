//! Text report assembly: title block, input echo, savings overview,
//! method table and charts.

use tethys_catalog::{AreaUnit, Method};
use tethys_estimate::{CalculationInput, Comparison, CostBreakdown};
use tethys_locale::{label, Label, Language};
use tracing::debug;

use crate::chart::BarChart;
use crate::context::ReportContext;
use crate::format::{display_width, format_amount, format_payback, pad_left, pad_right};

/// Width of the title rule.
const RULE_WIDTH: usize = 66;

/// Renders the complete text report.
///
/// Sections in order: title block, input data summary, savings
/// overview, per-method table, then three bar charts (cost, water, CO2)
/// unless the context disables them.
pub fn render_report(
    input: &CalculationInput,
    breakdown: &CostBreakdown,
    comparison: &Comparison,
    ctx: &ReportContext,
) -> String {
    let lang = ctx.language();
    debug!(language = %lang, charts = ctx.charts(), "rendering report");

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(" {}\n", label(lang, Label::ReportTitle)));
    out.push_str(&rule);
    out.push('\n');
    out.push('\n');

    out.push_str(&render_inputs(input, ctx, lang));
    out.push('\n');
    out.push_str(&render_overview(input, comparison, lang));
    out.push('\n');
    out.push_str(&render_table(input, breakdown, lang));
    if ctx.charts() {
        out.push('\n');
        out.push_str(&render_charts(input, breakdown, lang));
    }
    out
}

/// Localized display name of a method.
fn method_label(lang: Language, method: Method) -> &'static str {
    let key = match method {
        Method::Manual => Label::MethodManual,
        Method::Truck => Label::MethodTruck,
        Method::Auto => Label::MethodAuto,
        Method::EtBased => Label::MethodEtBased,
    };
    label(lang, key)
}

/// Renders a heading plus aligned `label: value` rows.
///
/// Widths are display cells, not chars, so Thai labels with zero-width
/// combining marks keep the value column straight.
fn section(title: &str, rows: &[(String, String)]) -> String {
    let lw = rows.iter().map(|(l, _)| display_width(l)).max().unwrap_or(0);
    let mut out = String::new();
    out.push_str(&format!("-- {title} --\n"));
    for (l, v) in rows {
        out.push_str(&format!("  {}  {v}\n", pad_right(l, lw)));
    }
    out
}

fn render_inputs(input: &CalculationInput, ctx: &ReportContext, lang: Language) -> String {
    let key = |l: Label| format!("{}:", label(lang, l));
    let city = input.city();
    let unit = input.unit();

    let area = if unit == AreaUnit::SquareMeter {
        format!("{} {}", format_amount(input.area()), unit.name())
    } else {
        format!(
            "{} {} (= {} m²)",
            format_amount(input.area()),
            unit.name(),
            format_amount(input.area_m2())
        )
    };

    let rows = vec![
        (key(Label::InputProject), ctx.project().to_string()),
        (key(Label::InputCity), city.name().to_string()),
        (key(Label::InputArea), area),
        (key(Label::InputUnit), unit.name().to_string()),
        (
            key(Label::InputYears),
            format!("{} {}", input.years(), label(lang, Label::Years)),
        ),
        (
            key(Label::InputCurrency),
            input.currency().code().to_string(),
        ),
        (
            key(Label::InputWaterPrice),
            format!(
                "{} {}",
                format_amount(input.water_price()),
                input.currency().code()
            ),
        ),
        (
            key(Label::BaseMethod),
            method_label(lang, input.base_method()).to_string(),
        ),
        (
            key(Label::ComparisonMethod),
            method_label(lang, input.comparison_method()).to_string(),
        ),
        (
            key(Label::ConstructionCoefficient),
            format_amount(city.coefficient()),
        ),
        (
            key(Label::EtRate),
            format!("{} mm/year", format_amount(city.et0_mm())),
        ),
    ];
    section(label(lang, Label::InputSummary), &rows)
}

fn render_overview(input: &CalculationInput, comparison: &Comparison, lang: Language) -> String {
    let key = |l: Label| format!("{}:", label(lang, l));
    let code = input.currency().code();

    let payback_value = format_payback(
        comparison.payback_years(),
        label(lang, Label::NotApplicable),
    );
    let payback = if comparison.payback_years().is_some() {
        format!("{payback_value} {}", label(lang, Label::Years))
    } else {
        payback_value
    };

    let rows = vec![
        (
            key(Label::AnnualSavings),
            format!(
                "{code} {} {}",
                format_amount(comparison.annual_savings()),
                label(lang, Label::PerYear)
            ),
        ),
        (
            key(Label::TotalSavings),
            format!("{code} {}", format_amount(comparison.total_savings())),
        ),
        (
            key(Label::CapexDifference),
            format!("{code} {}", format_amount(comparison.capex_difference())),
        ),
        (key(Label::Payback), payback),
        (
            key(Label::Co2Savings),
            format!(
                "{} {}",
                format_amount(comparison.co2_savings_t()),
                label(lang, Label::Tons)
            ),
        ),
    ];
    section(label(lang, Label::SavingsOverview), &rows)
}

fn render_table(input: &CalculationInput, breakdown: &CostBreakdown, lang: Language) -> String {
    let headers = [
        label(lang, Label::TableMethod).to_string(),
        format!("{} ({})", label(lang, Label::TableCost), input.currency().code()),
        format!("{} (m³/yr)", label(lang, Label::TableWater)),
        format!("{} (t/yr)", label(lang, Label::TableCo2)),
    ];
    let rows: Vec<[String; 4]> = breakdown
        .estimates()
        .iter()
        .map(|est| {
            [
                method_label(lang, est.method()).to_string(),
                format_amount(est.total_cost()),
                format_amount(est.annual_usage_m3()),
                format_amount(est.annual_co2_t()),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = std::array::from_fn(|i| display_width(&headers[i]));
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    // Method column left-aligned, numeric columns right-aligned.
    let format_line = |cells: &[String; 4]| -> String {
        let mut line = pad_right(&cells[0], widths[0]);
        for i in 1..4 {
            line.push_str("  ");
            line.push_str(&pad_left(&cells[i], widths[i]));
        }
        line.push('\n');
        line
    };

    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let mut out = String::new();
    out.push_str(&format_line(&headers));
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_line(row));
    }
    out
}

fn render_charts(input: &CalculationInput, breakdown: &CostBreakdown, lang: Language) -> String {
    let mut cost = BarChart::new(format!(
        "{} ({})",
        label(lang, Label::ChartCostTitle),
        input.currency().code()
    ));
    let mut water = BarChart::new(format!("{} (m³/yr)", label(lang, Label::ChartWaterTitle)));
    let mut co2 = BarChart::new(format!("{} (t/yr)", label(lang, Label::ChartCo2Title)));
    for est in breakdown.estimates() {
        let name = method_label(lang, est.method());
        cost.push(name, est.total_cost());
        water.push(name, est.annual_usage_m3());
        co2.push(name, est.annual_co2_t());
    }
    format!("{}\n{}\n{}", cost.render(), water.render(), co2.render())
}
