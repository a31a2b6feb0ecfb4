use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tethys irrigation savings estimator.
#[derive(Parser)]
#[command(
    name = "tethys",
    version,
    about = "Irrigation cost, water and CO2 savings estimator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate irrigation costs and render the savings report.
    Estimate(EstimateArgs),
    /// Print the reference data: cities, units, currencies, methods.
    Catalog(CatalogArgs),
}

/// Arguments for the `estimate` subcommand.
///
/// Every input flag overrides the corresponding TOML field; unset flags
/// fall back to the config file, and missing config fields to built-in
/// defaults.
#[derive(clap::Args)]
pub struct EstimateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tethys.toml")]
    pub config: PathBuf,

    /// Irrigated area, in the selected unit.
    #[arg(short, long)]
    pub area: Option<f64>,

    /// Area unit: m2, rai, hectare or acre.
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Reference city for ET0 and construction costs.
    #[arg(long)]
    pub city: Option<String>,

    /// Planning horizon in years.
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Display currency code, e.g. USD or THB.
    #[arg(long)]
    pub currency: Option<String>,

    /// Water price per m³ in the selected currency.
    #[arg(short = 'p', long = "water-price")]
    pub water_price: Option<f64>,

    /// Base irrigation method.
    #[arg(short, long)]
    pub base: Option<String>,

    /// Comparison irrigation method.
    #[arg(long = "compare")]
    pub comparison: Option<String>,

    /// Project name shown in the report.
    #[arg(long)]
    pub project: Option<String>,

    /// Report language: en, th or es.
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Write the JSON report document to this path.
    #[arg(short, long)]
    pub json: Option<PathBuf>,

    /// Suppress the chart section (print-friendly output).
    #[arg(long)]
    pub no_charts: bool,
}

/// Arguments for the `catalog` subcommand.
#[derive(clap::Args)]
pub struct CatalogArgs {
    /// Heading language: en, th or es.
    #[arg(short, long)]
    pub lang: Option<String>,
}
