//! Estimate command: compute the cost breakdown and render the report.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, info_span};

use tethys_estimate::{compare, estimate_costs};
use tethys_report::{render_report, to_json, ReportContext, ReportDocument};

use crate::cli::EstimateArgs;
use crate::config::TethysConfig;
use crate::convert;

/// Default config path; when absent the built-in defaults apply.
const DEFAULT_CONFIG: &str = "tethys.toml";

/// Run the estimate pipeline.
pub fn run(args: EstimateArgs) -> Result<()> {
    let _cmd = info_span!("estimate").entered();

    // 1. Load project TOML
    let config = load_config(&args)?;

    // 2. Merge CLI flags over config and resolve catalog entries
    let input = convert::build_input(&config, &args)?;
    let language = convert::build_language(&config, args.lang.as_deref())?;
    info!(
        city = input.city().name(),
        area_m2 = input.area_m2(),
        years = input.years(),
        currency = input.currency().code(),
        base = input.base_method().name(),
        comparison = input.comparison_method().name(),
        "inputs resolved"
    );

    // 3. Compute the per-method breakdown
    let breakdown = estimate_costs(&input).context("cost estimation failed")?;

    // 4. Compare the base method against the comparison method
    let comparison = compare(&breakdown, input.base_method(), input.comparison_method());

    // 5. Render the text report to stdout
    let mut ctx = ReportContext::new()
        .with_language(language)
        .with_charts(!args.no_charts);
    if let Some(project) = args.project.clone().or_else(|| config.project.clone()) {
        ctx = ctx.with_project(project);
    }
    print!("{}", render_report(&input, &breakdown, &comparison, &ctx));

    // 6. Optionally write the JSON document
    if let Some(ref path) = args.json {
        let document = ReportDocument::build(&input, &breakdown, &comparison, &ctx);
        let json = to_json(&document)?;
        std::fs::write(path, &json)
            .with_context(|| format!("failed to write JSON report: {}", path.display()))?;
        info!(path = %path.display(), "JSON report written");
    }

    Ok(())
}

/// Reads the config file, or falls back to built-in defaults when the
/// default path is simply absent. An explicitly named file must exist.
fn load_config(args: &EstimateArgs) -> Result<TethysConfig> {
    if !args.config.exists() && args.config == Path::new(DEFAULT_CONFIG) {
        info!("no config file found, using built-in defaults");
        return Ok(TethysConfig::default());
    }
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config = toml::from_str(&toml_str).context("failed to parse TOML config")?;
    Ok(config)
}
